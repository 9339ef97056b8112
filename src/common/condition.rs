use crate::{
    common::{self, path, registry},
    error::{Error, Result},
};

use std::{fmt, ops};

/// Logical operator for combining conditions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogicalOperator {
    /// Logical AND - all conditions must be true.
    And,
    /// Logical OR - at least one condition must be true.
    Or,
}

impl ops::Deref for LogicalOperator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

impl LogicalOperator {
    fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Join fragments with this operator inside one parenthesis pair.
    pub fn combine<I>(self, fragments: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut expression = String::new();
        let mut count = 0;
        for fragment in fragments {
            if count > 0 {
                expression.push_str(&self);
            }
            expression.push_str(fragment.as_ref());
            count += 1;
        }
        if count == 0 {
            return Err(Error::invalid_argument(
                self.name(),
                "at least one fragment is required",
            ));
        }
        Ok(format!("({expression})"))
    }
}

/// Comparison operator between an attribute (or its size) and a value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComparisonOperator {
    /// `=`
    Equal,
    /// `<>`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
}

impl ops::Deref for ComparisonOperator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        }
    }
}

/// DynamoDB attribute type tags accepted by `attribute_type`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AttributeType {
    /// String.
    String,
    /// String set.
    StringSet,
    /// Number.
    Number,
    /// Number set.
    NumberSet,
    /// Binary.
    Binary,
    /// Binary set.
    BinarySet,
    /// Boolean.
    Boolean,
    /// Null.
    Null,
    /// List.
    List,
    /// Map.
    Map,
}

impl AttributeType {
    /// The wire tag (`S`, `SS`, `N`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "S",
            Self::StringSet => "SS",
            Self::Number => "N",
            Self::NumberSet => "NS",
            Self::Binary => "B",
            Self::BinarySet => "BS",
            Self::Boolean => "BOOL",
            Self::Null => "NULL",
            Self::List => "L",
            Self::Map => "M",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join fragments with ` AND ` inside one parenthesis pair.
///
/// Fails with [`Error::InvalidArgument`] when no fragment is supplied.
pub fn and<I>(fragments: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    LogicalOperator::And.combine(fragments)
}

/// Join fragments with ` OR ` inside one parenthesis pair.
///
/// Fails with [`Error::InvalidArgument`] when no fragment is supplied.
pub fn or<I>(fragments: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    LogicalOperator::Or.combine(fragments)
}

/// Negate a fragment, reusing its outer parenthesis pair when it already has one.
pub fn not(fragment: &str) -> String {
    let trimmed = fragment.trim();
    if is_wrapped(trimmed) {
        format!("NOT {trimmed}")
    } else {
        format!("NOT ({trimmed})")
    }
}

/// Whether the opening parenthesis at the start closes at the very end.
fn is_wrapped(fragment: &str) -> bool {
    if !fragment.starts_with('(') || !fragment.ends_with(')') {
        return false;
    }
    let mut depth = 0usize;
    for (position, character) in fragment.char_indices() {
        match character {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return position == fragment.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

/// Compilation context for one condition, filter, key-condition or update expression.
///
/// Every call resolves its attribute path through the builder's
/// [`PlaceholderRegistry`](registry::PlaceholderRegistry) and returns an expression fragment.
/// Fragments are combined with [`and`], [`or`] and [`not`], and the final fragment is turned into
/// a [`CompiledExpression`](common::CompiledExpression) with [`ExpressionBuilder::finish`].
///
/// ```rust
/// use dynamodb_expression::common::condition::{self, ExpressionBuilder};
/// use serde_json::json;
///
/// # fn example() -> dynamodb_expression::Result<()> {
/// let mut builder = ExpressionBuilder::new();
/// let active = builder.eq("status", json!("active"));
/// let adult = builder.between("age", json!(18), json!(65));
/// let expression = condition::and([active, adult])?;
/// assert_eq!(expression, "(#status = :val0 AND #age BETWEEN :val1 AND :val2)");
/// let compiled = builder.finish(expression);
/// assert_eq!(compiled.expression_attribute_values.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ExpressionBuilder<T> {
    pub(super) registry: registry::PlaceholderRegistry<T>,
}

impl<T> Default for ExpressionBuilder<T> {
    fn default() -> Self {
        Self {
            registry: registry::PlaceholderRegistry::new(),
        }
    }
}

impl<T> ExpressionBuilder<T> {
    /// Create a builder with a fresh registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry backing this builder.
    pub fn registry(&self) -> &registry::PlaceholderRegistry<T> {
        &self.registry
    }

    /// Resolve an attribute path into its placeholder reference, e.g. `#user.#tags[0]`.
    pub fn attribute(&mut self, path: &str) -> String {
        let references: Vec<_> = path::tokenize(path)
            .into_iter()
            .map(|segment| {
                let placeholder = self.registry.name_of(segment.name());
                format!("{placeholder}{}", segment.index())
            })
            .collect();
        references.join(path::PATH_SEPARATOR)
    }

    /// `<path> <operator> <value>`
    pub fn compare(&mut self, path: &str, operator: ComparisonOperator, value: T) -> String {
        let attribute = self.attribute(path);
        let value = self.registry.value_of(value);
        format!("{attribute} {} {value}", &*operator)
    }

    /// `<path> = <value>`
    pub fn eq(&mut self, path: &str, value: T) -> String {
        self.compare(path, ComparisonOperator::Equal, value)
    }

    /// `<path> <> <value>`
    pub fn ne(&mut self, path: &str, value: T) -> String {
        self.compare(path, ComparisonOperator::NotEqual, value)
    }

    /// `<path> < <value>`
    pub fn lt(&mut self, path: &str, value: T) -> String {
        self.compare(path, ComparisonOperator::LessThan, value)
    }

    /// `<path> <= <value>`
    pub fn lte(&mut self, path: &str, value: T) -> String {
        self.compare(path, ComparisonOperator::LessThanOrEqual, value)
    }

    /// `<path> > <value>`
    pub fn gt(&mut self, path: &str, value: T) -> String {
        self.compare(path, ComparisonOperator::GreaterThan, value)
    }

    /// `<path> >= <value>`
    pub fn gte(&mut self, path: &str, value: T) -> String {
        self.compare(path, ComparisonOperator::GreaterThanOrEqual, value)
    }

    fn function(&mut self, function: &str, path: &str, value: T) -> String {
        let attribute = self.attribute(path);
        let value = self.registry.value_of(value);
        format!("{function}({attribute}, {value})")
    }

    /// `begins_with(<path>, <prefix>)`
    pub fn begins_with(&mut self, path: &str, prefix: T) -> String {
        self.function("begins_with", path, prefix)
    }

    /// `contains(<path>, <value>)`
    pub fn contains(&mut self, path: &str, value: T) -> String {
        self.function("contains", path, value)
    }

    /// `<path> BETWEEN <low> AND <high>`, bounds allocated in call order and not reordered.
    pub fn between(&mut self, path: &str, low: T, high: T) -> String {
        let attribute = self.attribute(path);
        let low = self.registry.value_of(low);
        let high = self.registry.value_of(high);
        format!("{attribute} BETWEEN {low} AND {high}")
    }

    /// `<path> IN (<v0>, <v1>, ...)`
    ///
    /// `None` entries are skipped. Fails when no value is supplied, or when every supplied value
    /// is `None`; the two cases carry different messages.
    pub fn is_in<I>(&mut self, path: &str, values: I) -> Result<String>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let values: Vec<_> = values.into_iter().collect();
        if values.is_empty() {
            return Err(Error::invalid_argument("in", "no values supplied"));
        }
        let values: Vec<_> = values.into_iter().flatten().collect();
        if values.is_empty() {
            return Err(Error::invalid_argument(
                "in",
                "no non-absent values supplied (every value was None)",
            ));
        }
        let attribute = self.attribute(path);
        let placeholders: Vec<_> = values
            .into_iter()
            .map(|value| self.registry.value_of(value))
            .collect();
        Ok(format!("{attribute} IN ({})", placeholders.join(", ")))
    }

    /// `attribute_exists(<path>)`
    pub fn exists(&mut self, path: &str) -> String {
        let attribute = self.attribute(path);
        format!("attribute_exists({attribute})")
    }

    /// `attribute_not_exists(<path>)`
    pub fn not_exists(&mut self, path: &str) -> String {
        let attribute = self.attribute(path);
        format!("attribute_not_exists({attribute})")
    }

    /// `size(<path>)`
    pub fn size(&mut self, path: &str) -> String {
        let attribute = self.attribute(path);
        format!("size({attribute})")
    }

    /// `size(<path>) <operator> <value>`
    pub fn size_compare(&mut self, path: &str, operator: ComparisonOperator, value: T) -> String {
        let size = self.size(path);
        let value = self.registry.value_of(value);
        format!("{size} {} {value}", &*operator)
    }

    /// `size(<path>) > <value>`
    pub fn size_gt(&mut self, path: &str, value: T) -> String {
        self.size_compare(path, ComparisonOperator::GreaterThan, value)
    }

    /// `size(<path>) < <value>`
    pub fn size_lt(&mut self, path: &str, value: T) -> String {
        self.size_compare(path, ComparisonOperator::LessThan, value)
    }

    /// `size(<path>) >= <value>`
    pub fn size_gte(&mut self, path: &str, value: T) -> String {
        self.size_compare(path, ComparisonOperator::GreaterThanOrEqual, value)
    }

    /// `size(<path>) <= <value>`
    pub fn size_lte(&mut self, path: &str, value: T) -> String {
        self.size_compare(path, ComparisonOperator::LessThanOrEqual, value)
    }

    /// `attribute_type(<path>, <type>)`, binding the type tag as a string value.
    pub fn attribute_type(&mut self, path: &str, attribute_type: AttributeType) -> String
    where
        T: From<&'static str>,
    {
        self.function("attribute_type", path, T::from(attribute_type.as_str()))
    }

    /// Consume the builder into a compiled unit for `expression`.
    pub fn finish(self, expression: String) -> common::CompiledExpression<T> {
        let (expression_attribute_names, expression_attribute_values) =
            self.registry.into_parts();
        common::CompiledExpression {
            expression,
            expression_attribute_names,
            expression_attribute_values,
        }
    }

    /// Compile `expression` into a unit while keeping the builder for further expressions of the
    /// same request.
    ///
    /// The unit takes the values bound since the previous split and a copy of every name seen so
    /// far; the value counter keeps going, so units split from one builder never share a value
    /// placeholder.
    pub fn split_off(&mut self, expression: String) -> common::CompiledExpression<T> {
        common::CompiledExpression {
            expression,
            expression_attribute_names: self.registry.names().clone(),
            expression_attribute_values: self.registry.take_values(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indexmap::IndexMap;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn names(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(placeholder, name)| (placeholder.to_string(), name.to_string()))
            .collect()
    }

    fn values(pairs: &[(&str, Value)]) -> IndexMap<String, Value> {
        pairs
            .iter()
            .map(|(placeholder, value)| (placeholder.to_string(), value.clone()))
            .collect()
    }

    #[rstest]
    #[case::eq(ComparisonOperator::Equal, "#a = :val0")]
    #[case::ne(ComparisonOperator::NotEqual, "#a <> :val0")]
    #[case::lt(ComparisonOperator::LessThan, "#a < :val0")]
    #[case::lte(ComparisonOperator::LessThanOrEqual, "#a <= :val0")]
    #[case::gt(ComparisonOperator::GreaterThan, "#a > :val0")]
    #[case::gte(ComparisonOperator::GreaterThanOrEqual, "#a >= :val0")]
    fn test_compare(#[case] operator: ComparisonOperator, #[case] expected: &str) {
        let mut builder = ExpressionBuilder::new();
        let actual = builder.compare("a", operator, json!(1));
        assert_eq!(actual, expected);
        assert_eq!(builder.registry().values(), &values(&[(":val0", json!(1))]));
    }

    #[test]
    fn test_comparison_shortcuts() {
        let mut builder = ExpressionBuilder::new();
        let actual = vec![
            builder.eq("a", json!(1)),
            builder.ne("a", Value::Null),
            builder.lt("a", json!(true)),
            builder.lte("a", json!({"b": 1})),
            builder.gt("a", json!([1, 2])),
            builder.gte("a", json!("2024-01-01T00:00:00Z")),
        ];
        assert_eq!(
            actual,
            vec![
                "#a = :val0",
                "#a <> :val1",
                "#a < :val2",
                "#a <= :val3",
                "#a > :val4",
                "#a >= :val5",
            ]
        );
        assert_eq!(builder.registry().names(), &names(&[("#a", "a")]));
    }

    #[test]
    fn test_nested_path_scenario() {
        let mut builder = ExpressionBuilder::new();
        let expression = builder.eq("user.profile.email", json!("x@y.com"));
        let compiled = builder.finish(expression);
        assert_eq!(
            compiled,
            common::CompiledExpression {
                expression: "#user.#profile.#email = :val0".to_string(),
                expression_attribute_names: names(&[
                    ("#user", "user"),
                    ("#profile", "profile"),
                    ("#email", "email"),
                ]),
                expression_attribute_values: values(&[(":val0", json!("x@y.com"))]),
            }
        );
    }

    #[test]
    fn test_between_continues_counter() {
        let mut builder = ExpressionBuilder::new();
        builder.eq("name", json!("x"));
        let actual = builder.between("age", json!(18), json!(65));
        assert_eq!(actual, "#age BETWEEN :val1 AND :val2");
        assert_eq!(
            builder.registry().values(),
            &values(&[
                (":val0", json!("x")),
                (":val1", json!(18)),
                (":val2", json!(65)),
            ])
        );
    }

    #[test]
    fn test_between_keeps_bound_order() {
        let mut builder = ExpressionBuilder::new();
        let actual = builder.between("age", json!(65), json!(18));
        assert_eq!(actual, "#age BETWEEN :val0 AND :val1");
        assert_eq!(
            builder.registry().values(),
            &values(&[(":val0", json!(65)), (":val1", json!(18))])
        );
    }

    #[rstest]
    #[case::begins_with("begins_with", "begins_with(#a.#b, :val0)")]
    #[case::contains("contains", "contains(#a.#b, :val0)")]
    fn test_functions(#[case] function: &str, #[case] expected: &str) {
        let mut builder = ExpressionBuilder::new();
        let actual = match function {
            "begins_with" => builder.begins_with("a.b", json!("x")),
            _ => builder.contains("a.b", json!("x")),
        };
        assert_eq!(actual, expected);
        assert_eq!(builder.registry().allocated_values(), 1);
    }

    #[rstest]
    #[case::single(vec![Some(json!(1))], "#a IN (:val0)", 1)]
    #[case::multiple(
        vec![Some(json!(1)), Some(json!("b")), Some(Value::Null)],
        "#a IN (:val0, :val1, :val2)",
        3
    )]
    #[case::skips_absent(
        vec![None, Some(json!(1)), None, Some(json!(2))],
        "#a IN (:val0, :val1)",
        2
    )]
    fn test_is_in(
        #[case] input: Vec<Option<Value>>,
        #[case] expected: &str,
        #[case] allocated: usize,
    ) {
        let mut builder = ExpressionBuilder::new();
        let actual = builder.is_in("a", input).unwrap();
        assert_eq!(actual, expected);
        assert_eq!(builder.registry().allocated_values(), allocated);
    }

    #[rstest]
    #[case::empty(vec![], "no values supplied")]
    #[case::all_absent(vec![None, None], "no non-absent values supplied (every value was None)")]
    fn test_is_in_rejects(#[case] input: Vec<Option<Value>>, #[case] expected: &str) {
        let mut builder = ExpressionBuilder::new();
        builder.eq("b", json!(1));
        let error = builder.is_in("a", input).unwrap_err();
        match error {
            Error::InvalidArgument { operator, reason } => {
                assert_eq!(operator, "in");
                assert_eq!(reason, expected);
            }
            other => panic!("unexpected error: {other}"),
        }
        // nothing from the failing call reaches the registry
        assert_eq!(builder.registry().names(), &names(&[("#b", "b")]));
        assert_eq!(builder.registry().allocated_values(), 1);
    }

    #[test]
    fn test_is_in_messages_differ() {
        let mut builder: ExpressionBuilder<Value> = ExpressionBuilder::new();
        let empty = builder.is_in("a", Vec::new()).unwrap_err().to_string();
        let absent = builder.is_in("a", vec![None, None]).unwrap_err().to_string();
        assert_ne!(empty, absent);
    }

    #[test]
    fn test_existence_and_size_do_not_allocate_values() {
        let mut builder: ExpressionBuilder<Value> = ExpressionBuilder::new();
        let actual = vec![
            builder.exists("a.b"),
            builder.not_exists("a"),
            builder.size("tags"),
        ];
        assert_eq!(
            actual,
            vec![
                "attribute_exists(#a.#b)",
                "attribute_not_exists(#a)",
                "size(#tags)",
            ]
        );
        assert_eq!(builder.registry().allocated_values(), 0);
        assert_eq!(
            builder.registry().names(),
            &names(&[("#a", "a"), ("#b", "b"), ("#tags", "tags")])
        );
    }

    #[test]
    fn test_size_comparisons() {
        let mut builder = ExpressionBuilder::new();
        let actual = vec![
            builder.size_gt("tags", json!(1)),
            builder.size_lt("tags", json!(10)),
            builder.size_gte("tags", json!(2)),
            builder.size_lte("tags", json!(9)),
        ];
        assert_eq!(
            actual,
            vec![
                "size(#tags) > :val0",
                "size(#tags) < :val1",
                "size(#tags) >= :val2",
                "size(#tags) <= :val3",
            ]
        );
    }

    #[rstest]
    #[case::string(AttributeType::String, "S")]
    #[case::string_set(AttributeType::StringSet, "SS")]
    #[case::number(AttributeType::Number, "N")]
    #[case::boolean(AttributeType::Boolean, "BOOL")]
    #[case::null(AttributeType::Null, "NULL")]
    #[case::map(AttributeType::Map, "M")]
    fn test_attribute_type(#[case] attribute_type: AttributeType, #[case] tag: &str) {
        let mut builder: ExpressionBuilder<Value> = ExpressionBuilder::new();
        let actual = builder.attribute_type("a", attribute_type);
        assert_eq!(actual, "attribute_type(#a, :val0)");
        assert_eq!(builder.registry().values(), &values(&[(":val0", json!(tag))]));
    }

    #[test]
    fn test_counter_ignores_name_only_calls() {
        let mut builder = ExpressionBuilder::new();
        let actual = vec![
            builder.eq("a", json!(1)),
            builder.exists("a"),
            builder.size("b"),
            builder.is_in("c", vec![Some(json!(1)), Some(json!(2))]).unwrap(),
            builder.not_exists("d"),
            builder.begins_with("e", json!("x")),
        ];
        assert_eq!(
            actual,
            vec![
                "#a = :val0",
                "attribute_exists(#a)",
                "size(#b)",
                "#c IN (:val1, :val2)",
                "attribute_not_exists(#d)",
                "begins_with(#e, :val3)",
            ]
        );
        let placeholders: Vec<_> = builder.registry().values().keys().cloned().collect();
        assert_eq!(placeholders, vec![":val0", ":val1", ":val2", ":val3"]);
    }

    #[test]
    fn test_repeated_path_reuses_name() {
        let mut builder: ExpressionBuilder<Value> = ExpressionBuilder::new();
        let first = builder.attribute("user.profile");
        let before = builder.registry().names().len();
        let second = builder.attribute("user.profile");
        assert_eq!(first, second);
        assert_eq!(builder.registry().names().len(), before);
    }

    #[rstest]
    #[case::indexed("items[0].sku", "#items[0].#sku", &[("#items", "items"), ("#sku", "sku")])]
    #[case::empty("", "#_0", &[("#_0", "")])]
    #[case::special("first-name", "#first_name", &[("#first_name", "first-name")])]
    #[case::special_nested(
        "order.line-items[2].unit price",
        "#order.#line_items[2].#unit_price",
        &[("#order", "order"), ("#line_items", "line-items"), ("#unit_price", "unit price")]
    )]
    fn test_attribute(
        #[case] path: &str,
        #[case] expected: &str,
        #[case] expected_names: &[(&str, &str)],
    ) {
        let mut builder: ExpressionBuilder<Value> = ExpressionBuilder::new();
        assert_eq!(builder.attribute(path), expected);
        assert_eq!(builder.registry().names(), &names(expected_names));
    }

    #[rstest]
    #[case::and_single(LogicalOperator::And, vec!["#a = :val0"], "(#a = :val0)")]
    #[case::and_multiple(
        LogicalOperator::And,
        vec!["#a = :val0", "#b = :val1"],
        "(#a = :val0 AND #b = :val1)"
    )]
    #[case::or_multiple(
        LogicalOperator::Or,
        vec!["#a = :val0", "#b = :val1", "#c = :val2"],
        "(#a = :val0 OR #b = :val1 OR #c = :val2)"
    )]
    fn test_combine(
        #[case] operator: LogicalOperator,
        #[case] fragments: Vec<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(operator.combine(fragments).unwrap(), expected);
    }

    #[rstest]
    #[case::and(LogicalOperator::And, "and")]
    #[case::or(LogicalOperator::Or, "or")]
    fn test_combine_rejects_empty(#[case] operator: LogicalOperator, #[case] name: &str) {
        let error = operator.combine(Vec::<String>::new()).unwrap_err();
        assert!(error.is_invalid_argument());
        match error {
            Error::InvalidArgument { operator, .. } => assert_eq!(operator, name),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_and_or_nested_scenario() {
        let mut builder = ExpressionBuilder::new();
        let a = builder.eq("a", json!(1));
        let b = builder.eq("b", json!(2));
        let c = builder.eq("c", json!(3));
        let actual = and([a, or([b, c]).unwrap()]).unwrap();
        assert_eq!(actual, "(#a = :val0 AND (#b = :val1 OR #c = :val2))");
    }

    #[rstest]
    #[case::bare("#a = :val0", "NOT (#a = :val0)")]
    #[case::wrapped("(#a = :val0 AND #b = :val1)", "NOT (#a = :val0 AND #b = :val1)")]
    #[case::wrapped_with_whitespace("  (#a = :val0)  ", "NOT (#a = :val0)")]
    #[case::function("attribute_exists(#a)", "NOT (attribute_exists(#a))")]
    #[case::sibling_groups("(#a = :val0) OR (#b = :val1)", "NOT ((#a = :val0) OR (#b = :val1))")]
    #[case::nested_wrapped("((#a = :val0))", "NOT ((#a = :val0))")]
    fn test_not(#[case] fragment: &str, #[case] expected: &str) {
        assert_eq!(not(fragment), expected);
    }

    #[test]
    fn test_split_off_shares_counter() {
        let mut builder = ExpressionBuilder::new();
        let key = builder.eq("pk", json!("a"));
        let key = builder.split_off(key);
        let filter = builder.gt("score", json!(10));
        let filter = builder.finish(filter);
        assert_eq!(key.expression, "#pk = :val0");
        assert_eq!(key.expression_attribute_values, values(&[(":val0", json!("a"))]));
        assert_eq!(filter.expression, "#score > :val1");
        assert_eq!(filter.expression_attribute_values, values(&[(":val1", json!(10))]));
        assert_eq!(
            filter.expression_attribute_names,
            names(&[("#pk", "pk"), ("#score", "score")])
        );
    }
}
