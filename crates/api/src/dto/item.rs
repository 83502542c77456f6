//! Item request/response DTOs and mapping.

use serde::{Deserialize, Serialize};
use stockroom_core::error::CoreError;
use stockroom_core::types::{DbId, Timestamp};
use stockroom_core::validation::not_blank;
use stockroom_db::models::item::{Item, ItemChanges};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Maximum characters in an item name (matches `VARCHAR(100)`).
pub const NAME_MAX_CHARS: u64 = 100;

/// Body of `POST /items` and `PUT /items/{id}`.
///
/// Every field is optional on the wire so that a missing field is reported
/// as a validation error alongside the others instead of failing parsing.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ItemRequest {
    /// Name of the item.
    #[schema(example = "Laptop", max_length = 100)]
    #[validate(
        required(message = "Name is required"),
        length(max = NAME_MAX_CHARS, message = "Name should not exceed 100 characters"),
        custom(function = "not_blank", message = "Name is required")
    )]
    pub name: Option<String>,

    /// Quantity available.
    #[schema(example = 10, minimum = 0)]
    #[validate(
        required(message = "Quantity is required"),
        range(min = 0, message = "Quantity should be greater than or equal to 0")
    )]
    pub quantity: Option<i32>,

    /// Whether the item is active.
    #[schema(example = true)]
    #[validate(required(message = "Active status is required"))]
    pub active: Option<bool>,
}

impl ItemRequest {
    /// Map a request that already passed [`Validate`] to the mutable item
    /// columns.
    pub fn into_changes(self) -> Result<ItemChanges, CoreError> {
        let (Some(name), Some(quantity), Some(active)) = (self.name, self.quantity, self.active)
        else {
            return Err(CoreError::InvalidData(
                "Item request is missing required fields".into(),
            ));
        };
        Ok(ItemChanges {
            name,
            quantity,
            active,
        })
    }
}

/// Item as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ItemResponse {
    #[schema(value_type = i32, example = 1)]
    pub id: DbId,
    #[schema(example = "Laptop")]
    pub name: String,
    #[schema(example = 10)]
    pub quantity: i32,
    pub active: bool,
    /// Creation time, assigned by the server.
    #[schema(value_type = String, format = DateTime)]
    pub created: Timestamp,
    /// External identifier, assigned by the server.
    pub uuid: Uuid,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            active: item.active,
            created: item.created,
            uuid: item.uuid,
        }
    }
}
