use crate::{common, error::Result, write};

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use std::collections;

/// update item operation
#[derive(Debug, PartialEq)]
struct UpdateItemInput {
    keys: collections::HashMap<String, types::AttributeValue>,
    update_expression: String,
    write_operation: write::common::WriteInput,
}

/// Update item request.
///
/// A condition and an update compiled from one builder share its value counter,
/// so split the condition off before compiling the update:
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_expression::{common, write};
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let mut builder = common::condition::ExpressionBuilder::new();
/// let condition = builder.eq("version", json!(3));
/// let condition = builder.split_off(condition);
/// let update = builder.update([("name", Some(json!("Jane"))), ("nickname", None)])?;
/// let update_item = write::update_item::UpdateItem {
///     keys: common::key::Keys {
///         partition_key: common::key::Key {
///             name: "id".to_string(),
///             value: json!("1"),
///         },
///         ..Default::default()
///     },
///     update: builder.finish(update.expression()),
///     write_args: write::common::WriteArgs {
///         condition: Some(condition),
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
/// };
/// update_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq)]
pub struct UpdateItem<T> {
    /// The primary key of the item to update.
    pub keys: common::key::Keys<T>,
    /// The compiled update expression.
    pub update: common::CompiledExpression<T>,
    /// Additional write arguments (table name, condition, return values, etc.).
    pub write_args: write::common::WriteArgs<T>,
}

impl<T: Serialize> TryFrom<UpdateItem<T>> for UpdateItemInput {
    type Error = crate::Error;

    fn try_from(update_item: UpdateItem<T>) -> Result<Self> {
        let keys = update_item.keys.try_into()?;
        let mut write_operation: write::common::WriteInput =
            update_item.write_args.try_into()?;
        let update_expression = write_operation.merge_expression(update_item.update)?;
        let operation = Self {
            keys,
            update_expression,
            write_operation,
        };
        Ok(operation)
    }
}

impl<T: Serialize> UpdateItem<T> {
    /// Execute the update item request.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_expression.update_item", skip_all, err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    > {
        let update_item: UpdateItemInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client
            .update_item()
            .set_key(Some(update_item.keys))
            .update_expression(update_item.update_expression);
        crate::apply_write_operation!(builder, update_item.write_operation)
            .send()
            .await
    }
}
