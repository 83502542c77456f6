//! ItemDetail request/response DTOs and mapping.

use serde::{Deserialize, Serialize};
use stockroom_core::error::CoreError;
use stockroom_core::types::DbId;
use stockroom_core::validation::not_blank;
use stockroom_db::models::item_detail::{ItemDetailChanges, ItemDetailWithItem, NewItemDetail};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::item::ItemResponse;

/// Maximum characters in a detail description (matches `VARCHAR(255)`).
pub const DESCRIPTION_MAX_CHARS: u64 = 255;

/// Body of `POST /details` and `PUT /details/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetailRequest {
    #[schema(example = "Aluminium chassis", max_length = 255)]
    #[validate(
        required(message = "Description is required"),
        length(
            max = DESCRIPTION_MAX_CHARS,
            message = "Description should not exceed 255 characters"
        ),
        custom(function = "not_blank", message = "Description is required")
    )]
    pub description: Option<String>,

    #[schema(example = 2)]
    #[validate(required(message = "Quantity is required"))]
    pub quantity: Option<i32>,

    /// Id of the parent item.
    #[schema(value_type = Option<i32>, example = 1)]
    #[validate(required(message = "Item id is required"))]
    pub item_id: Option<DbId>,
}

impl ItemDetailRequest {
    /// Map a validated request to an insert input. The parent key is carried
    /// as-is; whether it exists is decided by the store.
    pub fn into_new(self) -> Result<NewItemDetail, CoreError> {
        let (description, quantity, item_id) = self.into_parts()?;
        Ok(NewItemDetail {
            description,
            quantity,
            item_id,
        })
    }

    /// Map a validated request to the mutable detail columns, including a
    /// possibly re-pointed parent key.
    pub fn into_changes(self) -> Result<ItemDetailChanges, CoreError> {
        let (description, quantity, item_id) = self.into_parts()?;
        Ok(ItemDetailChanges {
            description,
            quantity,
            item_id,
        })
    }

    fn into_parts(self) -> Result<(String, i32, DbId), CoreError> {
        let (Some(description), Some(quantity), Some(item_id)) =
            (self.description, self.quantity, self.item_id)
        else {
            return Err(CoreError::InvalidData(
                "Item detail request is missing required fields".into(),
            ));
        };
        Ok((description, quantity, item_id))
    }
}

/// Item detail as returned to clients, with its parent item embedded under
/// `responseDTO`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ItemDetailResponse {
    #[schema(value_type = i32, example = 1)]
    pub id: DbId,
    pub description: String,
    pub quantity: i32,
    #[serde(rename = "responseDTO")]
    pub item: ItemResponse,
}

impl From<ItemDetailWithItem> for ItemDetailResponse {
    fn from(row: ItemDetailWithItem) -> Self {
        Self {
            id: row.detail.id,
            description: row.detail.description,
            quantity: row.detail.quantity,
            item: ItemResponse::from(row.item),
        }
    }
}
