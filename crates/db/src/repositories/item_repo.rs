//! Repository for the `items` table.

use sqlx::PgPool;
use stockroom_core::types::DbId;

use crate::models::item::{Item, ItemChanges, NewItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "item_id, item_name, item_quantity, item_active, item_created, item_uuid";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (item_name, item_quantity, item_active, item_created, item_uuid)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.active)
            .bind(input.created)
            .bind(input.uuid)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE item_id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY item_id");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// List one window of items in id order.
    pub async fn list_page(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY item_id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Item>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of items.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Overwrite the mutable columns of an item. `item_created` and
    /// `item_uuid` are never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ItemChanges,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                item_name = $2,
                item_quantity = $3,
                item_active = $4
             WHERE item_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an item (and, via cascade, its details).
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE item_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
