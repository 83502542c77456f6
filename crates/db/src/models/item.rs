//! Item entity model and write inputs.

use sqlx::FromRow;
use stockroom_core::types::{DbId, Timestamp};
use uuid::Uuid;

/// A row from the `items` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Item {
    #[sqlx(rename = "item_id")]
    pub id: DbId,
    #[sqlx(rename = "item_name")]
    pub name: String,
    #[sqlx(rename = "item_quantity")]
    pub quantity: i32,
    #[sqlx(rename = "item_active")]
    pub active: bool,
    #[sqlx(rename = "item_created")]
    pub created: Timestamp,
    #[sqlx(rename = "item_uuid")]
    pub uuid: Uuid,
}

/// Insert input. `created` and `uuid` are assigned by the caller at
/// creation time and never change afterwards.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub quantity: i32,
    pub active: bool,
    pub created: Timestamp,
    pub uuid: Uuid,
}

/// The mutable columns of an item. Applied as a full overwrite.
#[derive(Debug, Clone)]
pub struct ItemChanges {
    pub name: String,
    pub quantity: i32,
    pub active: bool,
}
