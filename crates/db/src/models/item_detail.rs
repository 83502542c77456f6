//! ItemDetail entity model and write inputs.

use sqlx::FromRow;
use stockroom_core::types::DbId;

use crate::models::item::Item;

/// A row from the `item_details` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ItemDetail {
    #[sqlx(rename = "detail_id")]
    pub id: DbId,
    #[sqlx(rename = "detail_description")]
    pub description: String,
    #[sqlx(rename = "detail_quantity")]
    pub quantity: i32,
    pub item_id: DbId,
}

/// A detail row joined with its parent item.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ItemDetailWithItem {
    #[sqlx(flatten)]
    pub detail: ItemDetail,
    #[sqlx(flatten)]
    pub item: Item,
}

/// Insert input. `item_id` is not checked here; the foreign key decides.
#[derive(Debug, Clone)]
pub struct NewItemDetail {
    pub description: String,
    pub quantity: i32,
    pub item_id: DbId,
}

/// The mutable columns of a detail, including its parent reference.
#[derive(Debug, Clone)]
pub struct ItemDetailChanges {
    pub description: String,
    pub quantity: i32,
    pub item_id: DbId,
}

/// Outcome of a detail write that depends on a parent `items` row.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailWrite {
    /// The row was written; carries the joined result.
    Saved(ItemDetailWithItem),
    /// No detail with the target id exists (update only).
    DetailMissing,
    /// The referenced parent item does not exist. Nothing was written.
    ItemMissing,
}
