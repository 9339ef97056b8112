use indexmap::IndexMap;
use std::collections;

/// Prefix of every attribute-name placeholder.
const NAME_PREFIX: &str = "#";

/// Prefix of every value placeholder, followed by the allocation index.
const VALUE_PREFIX: &str = ":val";

/// Placeholder allocator for one compilation unit.
///
/// Attribute-name segments are deduplicated: a segment always resolves to the same `#name`
/// placeholder within one registry. Characters outside `[A-Za-z0-9_]` become `_` in the
/// placeholder while the name map keeps the raw segment. Values are never deduplicated: every literal gets a fresh
/// `:valN` placeholder, with `N` counting up from `0` without gaps.
///
/// ```rust
/// use dynamodb_expression::common::registry;
///
/// let mut registry = registry::PlaceholderRegistry::new();
/// assert_eq!(registry.name_of("status"), "#status");
/// assert_eq!(registry.name_of("status"), "#status");
/// assert_eq!(registry.value_of("active"), ":val0");
/// assert_eq!(registry.value_of("active"), ":val1");
/// assert_eq!(registry.names().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderRegistry<T> {
    names: IndexMap<String, String>,
    placeholders: collections::HashMap<String, String>,
    values: IndexMap<String, T>,
    counter: usize,
}

impl<T> Default for PlaceholderRegistry<T> {
    fn default() -> Self {
        Self {
            names: IndexMap::new(),
            placeholders: collections::HashMap::new(),
            values: IndexMap::new(),
            counter: 0,
        }
    }
}

impl<T> PlaceholderRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the placeholder of a raw attribute-name segment, minting it on first use.
    pub fn name_of(&mut self, segment: &str) -> String {
        if let Some(placeholder) = self.placeholders.get(segment) {
            return placeholder.clone();
        }
        let candidate = if segment.is_empty() {
            format!("{NAME_PREFIX}_{}", self.names.len())
        } else {
            format!("{NAME_PREFIX}{}", placeholder_safe(segment))
        };
        let mut placeholder = candidate.clone();
        let mut suffix = 0;
        // the candidate may already belong to a positional or suffixed placeholder
        while self.names.contains_key(&placeholder) {
            placeholder = format!("{candidate}_{suffix}");
            suffix += 1;
        }
        self.names.insert(placeholder.clone(), segment.to_string());
        self.placeholders
            .insert(segment.to_string(), placeholder.clone());
        placeholder
    }

    /// Bind a literal to a fresh value placeholder.
    pub fn value_of(&mut self, literal: T) -> String {
        let placeholder = format!("{VALUE_PREFIX}{}", self.counter);
        self.counter += 1;
        self.values.insert(placeholder.clone(), literal);
        placeholder
    }

    /// Name placeholders in first-use order.
    pub fn names(&self) -> &IndexMap<String, String> {
        &self.names
    }

    /// Value placeholders in allocation order.
    pub fn values(&self) -> &IndexMap<String, T> {
        &self.values
    }

    /// Number of value placeholders allocated so far, including taken ones.
    pub fn allocated_values(&self) -> usize {
        self.counter
    }

    /// Move out the values bound so far; the counter keeps going.
    pub(crate) fn take_values(&mut self) -> IndexMap<String, T> {
        std::mem::take(&mut self.values)
    }

    /// Consume the registry, returning the name and value maps.
    pub fn into_parts(self) -> (IndexMap<String, String>, IndexMap<String, T>) {
        (self.names, self.values)
    }
}

/// Replace characters DynamoDB rejects in a name placeholder with `_`.
fn placeholder_safe(segment: &str) -> String {
    segment
        .chars()
        .map(|character| {
            if character.is_ascii_alphanumeric() || character == '_' {
                character
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::single(vec!["a"], vec!["#a"])]
    #[case::repeated(vec!["a", "b", "a"], vec!["#a", "#b", "#a"])]
    #[case::empty_segment(vec!["", "a", ""], vec!["#_0", "#a", "#_0"])]
    #[case::fallback_collision(vec!["_0", ""], vec!["#_0", "#_1"])]
    #[case::suffix_collision(vec!["", "_0"], vec!["#_0", "#_0_0"])]
    #[case::invalid_characters(
        vec!["first-name", "a b", "é"],
        vec!["#first_name", "#a_b", "#_"]
    )]
    #[case::sanitized_collision(
        vec!["first_name", "first-name"],
        vec!["#first_name", "#first_name_0"]
    )]
    fn test_name_of(#[case] segments: Vec<&str>, #[case] expected: Vec<&str>) {
        let mut registry: PlaceholderRegistry<Value> = PlaceholderRegistry::new();
        let actual: Vec<_> = segments
            .into_iter()
            .map(|segment| registry.name_of(segment))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_names_keep_first_use_order() {
        let mut registry: PlaceholderRegistry<Value> = PlaceholderRegistry::new();
        registry.name_of("c");
        registry.name_of("a");
        registry.name_of("c");
        registry.name_of("b");
        let names: Vec<_> = registry.names().iter().collect();
        assert_eq!(
            names,
            vec![
                (&"#c".to_string(), &"c".to_string()),
                (&"#a".to_string(), &"a".to_string()),
                (&"#b".to_string(), &"b".to_string()),
            ]
        );
    }

    #[test]
    fn test_value_of_never_deduplicates() {
        let mut registry = PlaceholderRegistry::new();
        assert_eq!(registry.value_of(json!("x")), ":val0");
        assert_eq!(registry.value_of(json!("x")), ":val1");
        assert_eq!(registry.value_of(Value::Null), ":val2");
        assert_eq!(
            registry.values(),
            &IndexMap::from([
                (":val0".to_string(), json!("x")),
                (":val1".to_string(), json!("x")),
                (":val2".to_string(), Value::Null),
            ])
        );
    }

    #[test]
    fn test_take_values_keeps_counter() {
        let mut registry = PlaceholderRegistry::new();
        registry.value_of(json!(1));
        let taken = registry.take_values();
        assert_eq!(taken.len(), 1);
        assert!(registry.values().is_empty());
        assert_eq!(registry.value_of(json!(2)), ":val1");
        assert_eq!(registry.allocated_values(), 2);
    }
}
