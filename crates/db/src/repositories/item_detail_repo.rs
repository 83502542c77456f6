//! Repository for the `item_details` table.
//!
//! Reads and writes return each detail joined with its parent item. Writes
//! are single statements: a missing parent surfaces as a foreign-key
//! violation, which is reported as [`DetailWrite::ItemMissing`] instead of
//! an error, so no separate existence read precedes the write.

use sqlx::PgPool;
use stockroom_core::types::DbId;

use crate::models::item_detail::{
    DetailWrite, ItemDetailChanges, ItemDetailWithItem, NewItemDetail,
};

/// Detail columns returned by writes.
const DETAIL_COLUMNS: &str = "detail_id, detail_description, detail_quantity, item_id";

/// Joined column list. `item_id` is shared by both halves of the row.
const JOINED_COLUMNS: &str = "d.detail_id, d.detail_description, d.detail_quantity, d.item_id, \
     i.item_name, i.item_quantity, i.item_active, i.item_created, i.item_uuid";

/// Provides CRUD operations for item details.
pub struct ItemDetailRepo;

impl ItemDetailRepo {
    /// Insert a new detail under `input.item_id`.
    pub async fn create(pool: &PgPool, input: &NewItemDetail) -> Result<DetailWrite, sqlx::Error> {
        let query = format!(
            "WITH d AS (
                INSERT INTO item_details (detail_description, detail_quantity, item_id)
                VALUES ($1, $2, $3)
                RETURNING {DETAIL_COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM d JOIN items i ON i.item_id = d.item_id"
        );
        let result = sqlx::query_as::<_, ItemDetailWithItem>(&query)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(input.item_id)
            .fetch_one(pool)
            .await;

        match result {
            Ok(row) => Ok(DetailWrite::Saved(row)),
            Err(err) if is_foreign_key_violation(&err) => {
                tracing::debug!(
                    item_id = input.item_id,
                    "Detail write rejected, parent item missing"
                );
                Ok(DetailWrite::ItemMissing)
            }
            Err(err) => Err(err),
        }
    }

    /// Find a detail (with its item) by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ItemDetailWithItem>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM item_details d
             JOIN items i ON i.item_id = d.item_id
             WHERE d.detail_id = $1"
        );
        sqlx::query_as::<_, ItemDetailWithItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all details (with their items) in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ItemDetailWithItem>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM item_details d
             JOIN items i ON i.item_id = d.item_id
             ORDER BY d.detail_id"
        );
        sqlx::query_as::<_, ItemDetailWithItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a detail's description, quantity and parent reference.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ItemDetailChanges,
    ) -> Result<DetailWrite, sqlx::Error> {
        let query = format!(
            "WITH d AS (
                UPDATE item_details SET
                    detail_description = $2,
                    detail_quantity = $3,
                    item_id = $4
                WHERE detail_id = $1
                RETURNING {DETAIL_COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM d JOIN items i ON i.item_id = d.item_id"
        );
        let result = sqlx::query_as::<_, ItemDetailWithItem>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(input.item_id)
            .fetch_optional(pool)
            .await;

        match result {
            Ok(Some(row)) => Ok(DetailWrite::Saved(row)),
            Ok(None) => Ok(DetailWrite::DetailMissing),
            Err(err) if is_foreign_key_violation(&err) => {
                tracing::debug!(
                    item_id = input.item_id,
                    "Detail write rejected, parent item missing"
                );
                Ok(DetailWrite::ItemMissing)
            }
            Err(err) => Err(err),
        }
    }

    /// Permanently delete a detail. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM item_details WHERE detail_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}
