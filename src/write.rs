//! Write requests for modifying data in DynamoDB tables.
//!
//! This module provides requests for writing data to DynamoDB:
//! - Putting new items or replacing existing ones
//! - Updating items with compiled update expressions
//! - Deleting items by primary key

/// Common utilities and types for write requests.
pub mod common;

/// Delete item request for removing items from tables.
pub mod delete_item;

/// Put item request for creating or replacing items.
pub mod put_item;

/// Update item request for modifying existing items.
pub mod update_item;
