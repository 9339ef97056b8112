#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Expression
//!
//! A placeholder-safe compiler for Amazon DynamoDB expressions.
//!
//! ## Overview
//!
//! DynamoDB reserves hundreds of words as keywords and forbids inlining literals in expressions,
//! so every attribute name and value has to travel through `ExpressionAttributeNames` and
//! `ExpressionAttributeValues`. This library:
//! - Allocates `#name` placeholders once per attribute-name segment and a fresh `:valN`
//!   placeholder per literal, deterministically in call order
//! - Resolves nested and indexed attribute paths such as `order.items[0].sku`
//! - Builds condition, filter, key-condition, projection and update expressions
//! - Merges compiled expressions into `aws-sdk-dynamodb` requests
//!
//! ## Quick Example
//!
//! ```no_run
//! use aws_sdk_dynamodb::Client;
//! use dynamodb_expression::{common, read};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::from_conf(aws_sdk_dynamodb::config::Config::builder().build());
//! let mut builder = common::condition::ExpressionBuilder::new();
//! let key_condition = builder.key_condition_with("pk", json!("user#1"), "sk", |sort_key| {
//!     sort_key.begins_with(json!("order#"))
//! });
//! let key_condition = builder.split_off(key_condition);
//! let shipped = builder.eq("order.status", json!("shipped"));
//! let large = builder.size_gt("order.items", json!(3));
//! let filter = common::condition::and([shipped, large])?;
//! // "#pk = :val0 AND begins_with(#sk, :val1)"
//! // "(#order.#status = :val2 AND size(#order.#items) > :val3)"
//! let query = read::query::Query {
//!     key_condition,
//!     multiple_read_args: read::common::MultipleReadArgs {
//!         filter: Some(builder.finish(filter)),
//!         table_name: "orders".to_string(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! query.send(&client).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - The expression compiler: placeholders, paths, conditions, keys,
//!   projections and updates
//! - [`mod@read`] - Read requests (GetItem, Query, Scan)
//! - [`mod@write`] - Write requests (PutItem, UpdateItem, DeleteItem)

/// The expression compiler.
pub mod common;

/// Error and result types.
pub mod error;

/// Read requests carrying compiled expressions.
///
/// This module provides requests for:
/// - Getting individual items by key
/// - Querying items with key conditions
/// - Scanning entire tables
pub mod read;

/// Write requests carrying compiled expressions.
///
/// This module provides requests for:
/// - Putting new items or replacing existing ones
/// - Updating items with compiled update expressions
/// - Deleting items by key
pub mod write;

pub use common::{CompiledExpression, condition::ExpressionBuilder};
pub use error::{Error, Result};
