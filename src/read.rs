//! Read requests for retrieving data from DynamoDB tables.
//!
//! This module provides requests for reading data from DynamoDB:
//! - Getting individual items by primary key
//! - Querying items with key conditions
//! - Scanning entire tables

/// Common utilities and types for read requests.
pub mod common;

/// Get item request for retrieving a single item by primary key.
pub mod get_item;

/// Query request for retrieving items with key conditions.
pub mod query;

/// Scan request for retrieving all items from a table.
pub mod scan;
