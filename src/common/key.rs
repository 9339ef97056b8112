use crate::{
    common::condition,
    error::{Error, Result},
};

use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::to_attribute_value;
use std::collections;

/// Key component.
///
/// ```rust
/// use dynamodb_expression::common::key;
///
/// let key = key::Key {
///     name: "id".to_string(),
///     value: "1".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Key<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

/// Primary key (partition key and optional sort key).
///
/// ```rust
/// use dynamodb_expression::common::key;
///
/// let keys = key::Keys {
///     partition_key: key::Key {
///         name: "id".to_string(),
///         value: "1".to_string(),
///     },
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keys<T> {
    /// The partition key (required).
    pub partition_key: Key<T>,
    /// The sort key (optional, only for tables with composite primary keys).
    pub sort_key: Option<Key<T>>,
}

impl<T: Serialize> TryFrom<Keys<T>> for collections::HashMap<String, types::AttributeValue> {
    type Error = Error;

    fn try_from(key: Keys<T>) -> Result<Self> {
        let partition_key_value = to_attribute_value(key.partition_key.value)?;
        let mut keys = Self::from([(key.partition_key.name, partition_key_value)]);
        if let Some(sort_key) = key.sort_key {
            let sort_key_value = to_attribute_value(sort_key.value)?;
            keys.insert(sort_key.name, sort_key_value);
        }
        Ok(keys)
    }
}

/// Condition on a single sort key attribute, bound to the builder that created it.
///
/// Only the operators DynamoDB accepts on a sort key in a key condition are exposed. Values go
/// through the parent builder's registry, so the fragments compose with the partition-key
/// equality of the same builder.
///
/// ```rust
/// use dynamodb_expression::common::condition::ExpressionBuilder;
/// use serde_json::json;
///
/// let mut builder = ExpressionBuilder::new();
/// let sort_key = builder.sort_key("created_at").begins_with(json!("2024-"));
/// assert_eq!(sort_key, "begins_with(#created_at, :val0)");
/// ```
#[derive(Debug)]
pub struct SortKeyCondition<'a, T> {
    builder: &'a mut condition::ExpressionBuilder<T>,
    path: String,
}

impl<T> SortKeyCondition<'_, T> {
    /// The bound attribute path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// `<sort key> = <value>`
    pub fn eq(&mut self, value: T) -> String {
        self.builder.eq(&self.path, value)
    }

    /// `<sort key> < <value>`
    pub fn lt(&mut self, value: T) -> String {
        self.builder.lt(&self.path, value)
    }

    /// `<sort key> <= <value>`
    pub fn lte(&mut self, value: T) -> String {
        self.builder.lte(&self.path, value)
    }

    /// `<sort key> > <value>`
    pub fn gt(&mut self, value: T) -> String {
        self.builder.gt(&self.path, value)
    }

    /// `<sort key> >= <value>`
    pub fn gte(&mut self, value: T) -> String {
        self.builder.gte(&self.path, value)
    }

    /// `<sort key> BETWEEN <low> AND <high>`
    pub fn between(&mut self, low: T, high: T) -> String {
        self.builder.between(&self.path, low, high)
    }

    /// `begins_with(<sort key>, <prefix>)`
    pub fn begins_with(&mut self, prefix: T) -> String {
        self.builder.begins_with(&self.path, prefix)
    }
}

impl<T> condition::ExpressionBuilder<T> {
    /// Bind a sort key attribute for a key condition.
    pub fn sort_key(&mut self, path: &str) -> SortKeyCondition<'_, T> {
        SortKeyCondition {
            builder: self,
            path: path.to_string(),
        }
    }

    /// `<partition key> = <value>`, followed by ` AND <sort key condition>` when one is given.
    pub fn key_condition(
        &mut self,
        partition_key: &str,
        value: T,
        sort_key_condition: Option<String>,
    ) -> String {
        let partition_key_condition = self.eq(partition_key, value);
        match sort_key_condition {
            Some(sort_key_condition) => {
                join_key_conditions(&partition_key_condition, &sort_key_condition)
            }
            None => partition_key_condition,
        }
    }

    /// Like [`key_condition`](Self::key_condition), allocating the partition key value before
    /// building the sort key condition with `sort_key_condition`.
    ///
    /// ```rust
    /// use dynamodb_expression::common::condition::ExpressionBuilder;
    /// use serde_json::json;
    ///
    /// let mut builder = ExpressionBuilder::new();
    /// let expression = builder.key_condition_with("pk", json!("user#1"), "sk", |sort_key| {
    ///     sort_key.between(json!(1), json!(5))
    /// });
    /// assert_eq!(expression, "#pk = :val0 AND #sk BETWEEN :val1 AND :val2");
    /// ```
    pub fn key_condition_with<F>(
        &mut self,
        partition_key: &str,
        value: T,
        sort_key: &str,
        sort_key_condition: F,
    ) -> String
    where
        F: FnOnce(&mut SortKeyCondition<'_, T>) -> String,
    {
        let partition_key_condition = self.eq(partition_key, value);
        let sort_key_condition = sort_key_condition(&mut self.sort_key(sort_key));
        join_key_conditions(&partition_key_condition, &sort_key_condition)
    }
}

fn join_key_conditions(partition_key_condition: &str, sort_key_condition: &str) -> String {
    let operator: &str = &condition::LogicalOperator::And;
    format!("{partition_key_condition}{operator}{sort_key_condition}")
}
