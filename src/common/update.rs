use crate::{
    common::{self, condition},
    error::{Error, Result},
};

use indexmap::IndexMap;

/// Separator between clauses sharing one keyword.
const CLAUSE_SEPARATOR: &str = ", ";

/// SET operation for updating attributes.
///
/// ```rust
/// use dynamodb_expression::common::update;
///
/// let assign = update::SetInput::Assign("value".to_string());
/// let increment = update::SetInput::Increment(10);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SetInput<T> {
    /// Assign a new value to the attribute (replaces existing value).
    Assign(T),
    /// Increment a numeric attribute by the specified value.
    Increment(T),
    /// Decrement a numeric attribute by the specified value.
    Decrement(T),
    /// Append values to the end of a list attribute.
    ListAppend(T),
    /// Prepend values to the beginning of a list attribute.
    ListPrepend(T),
    /// Assign a value only if the attribute doesn't exist.
    IfNotExists(T),
}

impl<T> SetInput<T> {
    fn get_set_expression(
        self,
        path: &str,
        registry: &mut common::registry::PlaceholderRegistry<T>,
    ) -> String {
        match self {
            SetInput::Assign(value) => {
                let value = registry.value_of(value);
                format!("{path} = {value}")
            }
            SetInput::Increment(value) => {
                let value = registry.value_of(value);
                format!("{path} = {path} + {value}")
            }
            SetInput::Decrement(value) => {
                let value = registry.value_of(value);
                format!("{path} = {path} - {value}")
            }
            SetInput::ListAppend(value) => {
                let value = registry.value_of(value);
                format!("{path} = list_append({path}, {value})")
            }
            SetInput::ListPrepend(value) => {
                let value = registry.value_of(value);
                format!("{path} = list_append({value}, {path})")
            }
            SetInput::IfNotExists(value) => {
                let value = registry.value_of(value);
                format!("{path} = if_not_exists({path}, {value})")
            }
        }
    }
}

/// What to do with one attribute in an update.
///
/// ```rust
/// use dynamodb_expression::common::update;
///
/// let set = update::UpdateInput::Set(update::SetInput::Assign("Jane".to_string()));
/// let remove: update::UpdateInput<String> = update::UpdateInput::Remove;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateInput<T> {
    /// SET the attribute.
    Set(SetInput<T>),
    /// REMOVE the attribute from the item.
    Remove,
    /// ADD a value to a number or a set.
    Add(T),
    /// DELETE values from a set.
    Delete(T),
}

impl<T> From<Option<T>> for UpdateInput<T> {
    /// `None` removes the attribute, `Some` assigns it.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Set(SetInput::Assign(value)),
            None => Self::Remove,
        }
    }
}

/// Clauses of an update expression, grouped by keyword in input order.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct UpdateClauses {
    /// `SET` clauses, e.g. `#a = :val0`.
    pub set: Vec<String>,
    /// `REMOVE` clauses, e.g. `#b`.
    pub remove: Vec<String>,
    /// `ADD` clauses, e.g. `#c :val1`.
    pub add: Vec<String>,
    /// `DELETE` clauses, e.g. `#d :val2`.
    pub delete: Vec<String>,
}

impl UpdateClauses {
    /// Whether no clause was produced.
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
            && self.remove.is_empty()
            && self.add.is_empty()
            && self.delete.is_empty()
    }

    /// The update expression text, one section per non-empty keyword in
    /// `SET`, `REMOVE`, `ADD`, `DELETE` order.
    pub fn expression(&self) -> String {
        let keywords = [
            ("SET", &self.set),
            ("REMOVE", &self.remove),
            ("ADD", &self.add),
            ("DELETE", &self.delete),
        ];
        let sections: Vec<_> = keywords
            .into_iter()
            .filter(|(_, clauses)| !clauses.is_empty())
            .map(|(keyword, clauses)| format!("{keyword} {}", clauses.join(CLAUSE_SEPARATOR)))
            .collect();
        sections.join(" ")
    }
}

impl<T> condition::ExpressionBuilder<T> {
    /// Compile a partial update where `None` removes the attribute and `Some` assigns it.
    ///
    /// Fails with [`Error::EmptyUpdate`] when `updates` is empty.
    pub fn update<I, K>(&mut self, updates: I) -> Result<UpdateClauses>
    where
        I: IntoIterator<Item = (K, Option<T>)>,
        K: AsRef<str>,
    {
        self.update_inputs(
            updates
                .into_iter()
                .map(|(path, value)| (path, UpdateInput::from(value))),
        )
    }

    /// Compile an update from explicit per-attribute actions.
    ///
    /// Fails with [`Error::EmptyUpdate`] when `updates` is empty.
    pub fn update_inputs<I, K>(&mut self, updates: I) -> Result<UpdateClauses>
    where
        I: IntoIterator<Item = (K, UpdateInput<T>)>,
        K: AsRef<str>,
    {
        let mut clauses = UpdateClauses::default();
        for (path, input) in updates {
            let attribute = self.attribute(path.as_ref());
            match input {
                UpdateInput::Set(set_input) => {
                    let clause = set_input.get_set_expression(&attribute, &mut self.registry);
                    clauses.set.push(clause);
                }
                UpdateInput::Remove => clauses.remove.push(attribute),
                UpdateInput::Add(value) => {
                    let value = self.registry.value_of(value);
                    clauses.add.push(format!("{attribute} {value}"));
                }
                UpdateInput::Delete(value) => {
                    let value = self.registry.value_of(value);
                    clauses.delete.push(format!("{attribute} {value}"));
                }
            }
        }
        if clauses.is_empty() {
            return Err(Error::EmptyUpdate);
        }
        Ok(clauses)
    }
}

/// A compiled partial update: clauses plus the placeholder maps they reference.
///
/// ```rust
/// use dynamodb_expression::common::update::UpdatePlan;
/// use serde_json::json;
///
/// # fn example() -> dynamodb_expression::Result<()> {
/// let plan = UpdatePlan::compile([("name", Some(json!("Jane"))), ("nickname", None)])?;
/// assert_eq!(plan.expression(), "SET #name = :val0 REMOVE #nickname");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UpdatePlan<T> {
    /// The update clauses.
    pub clauses: UpdateClauses,
    /// Name placeholder to raw attribute-name segment.
    pub expression_attribute_names: IndexMap<String, String>,
    /// Value placeholder to literal.
    pub expression_attribute_values: IndexMap<String, T>,
}

impl<T> UpdatePlan<T> {
    /// Compile a partial update with a fresh builder; `None` values become REMOVE clauses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_expression.update_plan", skip_all, err)
    )]
    pub fn compile<I, K>(updates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Option<T>)>,
        K: AsRef<str>,
    {
        let mut builder = condition::ExpressionBuilder::new();
        let clauses = builder.update(updates)?;
        Ok(Self::from_builder(clauses, builder))
    }

    /// Compile an update from explicit per-attribute actions with a fresh builder.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_expression.update_plan", skip_all, err)
    )]
    pub fn compile_inputs<I, K>(updates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, UpdateInput<T>)>,
        K: AsRef<str>,
    {
        let mut builder = condition::ExpressionBuilder::new();
        let clauses = builder.update_inputs(updates)?;
        Ok(Self::from_builder(clauses, builder))
    }

    fn from_builder(clauses: UpdateClauses, builder: condition::ExpressionBuilder<T>) -> Self {
        let (expression_attribute_names, expression_attribute_values) =
            builder.registry.into_parts();
        Self {
            clauses,
            expression_attribute_names,
            expression_attribute_values,
        }
    }

    /// The update expression text.
    pub fn expression(&self) -> String {
        self.clauses.expression()
    }
}

impl<T> From<UpdatePlan<T>> for common::CompiledExpression<T> {
    fn from(plan: UpdatePlan<T>) -> Self {
        Self {
            expression: plan.expression(),
            expression_attribute_names: plan.expression_attribute_names,
            expression_attribute_values: plan.expression_attribute_values,
        }
    }
}
