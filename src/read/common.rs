use crate::{common, error::Result};

use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::to_attribute_value;
use std::collections;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct SingleReadInput {
    pub(crate) consistent_read: Option<bool>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) projection_expression: Option<String>,
    pub(crate) table_name: String,
}

/// Arguments for single-item read requests (GetItem).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SingleReadArgs<T> {
    /// Whether to use a consistent read.
    ///
    /// `true` for strongly consistent reads, `false` or `None` for eventually consistent reads.
    pub consistent_read: Option<bool>,
    /// Which attributes to retrieve (projection expression).
    ///
    /// If `None`, all attributes are retrieved. Build it with
    /// [`ExpressionBuilder::projection`](common::condition::ExpressionBuilder::projection).
    pub projection: Option<common::CompiledExpression<T>>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl<T: Serialize> TryFrom<SingleReadArgs<T>> for SingleReadInput {
    type Error = crate::Error;

    fn try_from(single_read_args: SingleReadArgs<T>) -> Result<Self> {
        let mut expression_attribute_names = None;
        let mut expression_attribute_values = None;
        let projection_expression = single_read_args
            .projection
            .map(|projection| {
                projection.merge_into(
                    &mut expression_attribute_names,
                    &mut expression_attribute_values,
                )
            })
            .transpose()?;
        let operation = Self {
            consistent_read: single_read_args.consistent_read,
            expression_attribute_names,
            projection_expression,
            table_name: single_read_args.table_name,
        };
        Ok(operation)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct MultipleReadInput {
    pub(crate) consistent_read: Option<bool>,
    pub(crate) exclusive_start_key: Option<collections::HashMap<String, types::AttributeValue>>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) expression_attribute_values:
        Option<collections::HashMap<String, types::AttributeValue>>,
    pub(crate) filter_expression: Option<String>,
    pub(crate) index_name: Option<String>,
    pub(crate) limit: Option<i32>,
    pub(crate) projection_expression: Option<String>,
    pub(crate) select: Option<types::Select>,
    pub(crate) table_name: String,
}

impl MultipleReadInput {
    /// Merge an expression into this read request, returning its text.
    pub(crate) fn merge_expression<T: Serialize>(
        &mut self,
        expression: common::CompiledExpression<T>,
    ) -> Result<String> {
        expression.merge_into(
            &mut self.expression_attribute_names,
            &mut self.expression_attribute_values,
        )
    }
}

/// Arguments for multiple-item read requests (Query, Scan).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipleReadArgs<T> {
    /// Filter expression applied by DynamoDB to the matched items before returning them.
    pub filter: Option<common::CompiledExpression<T>>,
    /// Whether to use a consistent read.
    ///
    /// `true` for strongly consistent reads, `false` or `None` for eventually consistent reads.
    pub consistent_read: Option<bool>,
    /// The exclusive start key for pagination.
    ///
    /// Typically the `last_evaluated_key` of the previous page.
    pub exclusive_start_key: Option<collections::HashMap<String, T>>,
    /// The name of a global secondary index or local secondary index to read.
    pub index_name: Option<String>,
    /// The maximum number of items to evaluate (not necessarily the number of matching items).
    pub limit: Option<i32>,
    /// Which attributes to retrieve (projection expression).
    pub projection: Option<common::CompiledExpression<T>>,
    /// Which attributes to return.
    ///
    /// Use `Select::AllAttributes` (default), `Select::AllProjectedAttributes`,
    /// `Select::SpecificAttributes` (with `projection`), or `Select::Count`.
    pub select: Option<types::Select>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl<T: Serialize> TryFrom<MultipleReadArgs<T>> for MultipleReadInput {
    type Error = crate::Error;

    fn try_from(multiple_read_args: MultipleReadArgs<T>) -> Result<Self> {
        let exclusive_start_key = match multiple_read_args.exclusive_start_key {
            Some(exclusive_start_key) => {
                let mut serialized_exclusive_start_key =
                    collections::HashMap::with_capacity(exclusive_start_key.len());
                for (key, value) in exclusive_start_key {
                    let value = to_attribute_value(value)?;
                    serialized_exclusive_start_key.insert(key, value);
                }
                Some(serialized_exclusive_start_key)
            }
            None => None,
        };
        let mut operation = Self {
            consistent_read: multiple_read_args.consistent_read,
            exclusive_start_key,
            index_name: multiple_read_args.index_name,
            limit: multiple_read_args.limit,
            select: multiple_read_args.select,
            table_name: multiple_read_args.table_name,
            ..Default::default()
        };
        if let Some(filter) = multiple_read_args.filter {
            operation.filter_expression = Some(operation.merge_expression(filter)?);
        }
        if let Some(projection) = multiple_read_args.projection {
            operation.projection_expression = Some(operation.merge_expression(projection)?);
        }
        Ok(operation)
    }
}

/// apply common single read operation settings to a builder
#[macro_export]
macro_rules! apply_single_read_operation {
    ($builder:expr, $single_read_operation:expr) => {
        $builder
            .set_consistent_read($single_read_operation.consistent_read)
            .set_expression_attribute_names($single_read_operation.expression_attribute_names)
            .set_projection_expression($single_read_operation.projection_expression)
            .table_name($single_read_operation.table_name)
    };
}

/// apply common multiple read operation settings to a builder
#[macro_export]
macro_rules! apply_multiple_read_operation {
    ($builder:expr, $multiple_read_operation:expr) => {
        $builder
            .set_consistent_read($multiple_read_operation.consistent_read)
            .set_exclusive_start_key($multiple_read_operation.exclusive_start_key)
            .set_expression_attribute_names($multiple_read_operation.expression_attribute_names)
            .set_expression_attribute_values($multiple_read_operation.expression_attribute_values)
            .set_filter_expression($multiple_read_operation.filter_expression)
            .set_index_name($multiple_read_operation.index_name)
            .set_limit($multiple_read_operation.limit)
            .set_projection_expression($multiple_read_operation.projection_expression)
            .set_select($multiple_read_operation.select)
            .table_name($multiple_read_operation.table_name)
    };
}
