//! Store interfaces consumed by the service layer.
//!
//! Services receive an `Arc<dyn ItemStore>` / `Arc<dyn ItemDetailStore>` at
//! construction. [`PgStore`] is the production implementation and simply
//! delegates to the repositories; tests plug in their own.

use async_trait::async_trait;
use stockroom_core::types::DbId;

use crate::models::item::{Item, ItemChanges, NewItem};
use crate::models::item_detail::{
    DetailWrite, ItemDetailChanges, ItemDetailWithItem, NewItemDetail,
};
use crate::repositories::{ItemDetailRepo, ItemRepo};
use crate::DbPool;

/// Persistence operations on items.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every item in store order.
    async fn find_all(&self) -> Result<Vec<Item>, sqlx::Error>;

    /// One window of items plus the total item count.
    async fn find_page(&self, offset: i64, limit: i64) -> Result<(Vec<Item>, i64), sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Item>, sqlx::Error>;

    async fn insert(&self, input: &NewItem) -> Result<Item, sqlx::Error>;

    /// `None` when no item has this id.
    async fn update(&self, id: DbId, changes: &ItemChanges) -> Result<Option<Item>, sqlx::Error>;

    /// `false` when no item has this id. Removes the item's details too.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// Persistence operations on item details.
#[async_trait]
pub trait ItemDetailStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<ItemDetailWithItem>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<ItemDetailWithItem>, sqlx::Error>;

    /// Never returns [`DetailWrite::DetailMissing`].
    async fn insert(&self, input: &NewItemDetail) -> Result<DetailWrite, sqlx::Error>;

    async fn update(
        &self,
        id: DbId,
        changes: &ItemDetailChanges,
    ) -> Result<DetailWrite, sqlx::Error>;

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// Liveness check for the health endpoint.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// Store backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgStore {
    async fn find_all(&self) -> Result<Vec<Item>, sqlx::Error> {
        ItemRepo::list(&self.pool).await
    }

    async fn find_page(&self, offset: i64, limit: i64) -> Result<(Vec<Item>, i64), sqlx::Error> {
        let items = ItemRepo::list_page(&self.pool, offset, limit).await?;
        let total = ItemRepo::count(&self.pool).await?;
        Ok((items, total))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        ItemRepo::find_by_id(&self.pool, id).await
    }

    async fn insert(&self, input: &NewItem) -> Result<Item, sqlx::Error> {
        ItemRepo::create(&self.pool, input).await
    }

    async fn update(&self, id: DbId, changes: &ItemChanges) -> Result<Option<Item>, sqlx::Error> {
        ItemRepo::update(&self.pool, id, changes).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        ItemRepo::delete(&self.pool, id).await
    }
}

#[async_trait]
impl ItemDetailStore for PgStore {
    async fn find_all(&self) -> Result<Vec<ItemDetailWithItem>, sqlx::Error> {
        ItemDetailRepo::list(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<ItemDetailWithItem>, sqlx::Error> {
        ItemDetailRepo::find_by_id(&self.pool, id).await
    }

    async fn insert(&self, input: &NewItemDetail) -> Result<DetailWrite, sqlx::Error> {
        ItemDetailRepo::create(&self.pool, input).await
    }

    async fn update(
        &self,
        id: DbId,
        changes: &ItemDetailChanges,
    ) -> Result<DetailWrite, sqlx::Error> {
        ItemDetailRepo::update(&self.pool, id, changes).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        ItemDetailRepo::delete(&self.pool, id).await
    }
}

#[async_trait]
impl StoreHealth for PgStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
