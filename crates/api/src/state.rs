use std::sync::Arc;

use stockroom_db::store::{ItemDetailStore, ItemStore, StoreHealth};

use crate::config::ServerConfig;
use crate::services::{ItemDetailService, ItemService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Item operations.
    pub items: ItemService,
    /// Item detail operations.
    pub details: ItemDetailService,
    /// Store liveness check for `/health`.
    pub health: Arc<dyn StoreHealth>,
}

impl AppState {
    /// Wire every service to the same store.
    pub fn new<S>(store: Arc<S>, config: ServerConfig) -> Self
    where
        S: ItemStore + ItemDetailStore + StoreHealth + 'static,
    {
        let items: Arc<dyn ItemStore> = store.clone();
        let details: Arc<dyn ItemDetailStore> = store.clone();
        let health: Arc<dyn StoreHealth> = store;
        Self {
            config: Arc::new(config),
            items: ItemService::new(items),
            details: ItemDetailService::new(details),
            health,
        }
    }
}
