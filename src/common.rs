//! Expression compiler for DynamoDB.
//!
//! This module holds the placeholder registry, the path tokenizer and the expression builder,
//! together with the key, projection and update compilers built on top of them.

/// Expression builder: comparisons, functions and logical combinators.
pub mod condition;

/// Primary keys, key conditions and the sort-key condition adapter.
pub mod key;

/// Attribute path tokenization.
pub mod path;

/// Placeholder allocation for attribute names and values.
pub mod registry;

/// Projection expressions.
pub mod selection;

/// Update expressions (SET, REMOVE, ADD, DELETE).
pub mod update;

use crate::error::Result;

use aws_sdk_dynamodb::types;
use indexmap::IndexMap;
use serde::Serialize;
use serde_dynamo::to_attribute_value;
use std::collections;

/// A compiled expression: the text plus the placeholder maps it references.
///
/// All three parts are required together to form a valid request. Units belonging to the same
/// request are merged by the request layer; on a placeholder collision the unit merged last wins.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledExpression<T> {
    /// The expression text.
    pub expression: String,
    /// Name placeholder to raw attribute-name segment.
    pub expression_attribute_names: IndexMap<String, String>,
    /// Value placeholder to literal.
    pub expression_attribute_values: IndexMap<String, T>,
}

impl<T> Default for CompiledExpression<T> {
    fn default() -> Self {
        Self {
            expression: String::new(),
            expression_attribute_names: IndexMap::new(),
            expression_attribute_values: IndexMap::new(),
        }
    }
}

impl<T: Serialize> CompiledExpression<T> {
    /// Merge the placeholder maps into a request's maps, encoding values, and return the text.
    ///
    /// Empty maps leave the request untouched since DynamoDB rejects empty attribute maps.
    pub(crate) fn merge_into(
        self,
        names: &mut Option<collections::HashMap<String, String>>,
        values: &mut Option<collections::HashMap<String, types::AttributeValue>>,
    ) -> Result<String> {
        if !self.expression_attribute_names.is_empty() {
            names
                .get_or_insert_with(collections::HashMap::new)
                .extend(self.expression_attribute_names);
        }
        if !self.expression_attribute_values.is_empty() {
            let mut encoded =
                collections::HashMap::with_capacity(self.expression_attribute_values.len());
            for (placeholder, value) in self.expression_attribute_values {
                encoded.insert(placeholder, to_attribute_value(value)?);
            }
            values
                .get_or_insert_with(collections::HashMap::new)
                .extend(encoded);
        }
        Ok(self.expression)
    }
}
