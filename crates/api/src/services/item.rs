//! Item operations.

use std::sync::Arc;

use chrono::Utc;
use stockroom_core::messages::ResponseMessage;
use stockroom_core::pagination::{Page, PageRequest, PageResponse};
use stockroom_core::types::DbId;
use stockroom_db::models::item::NewItem;
use stockroom_db::store::ItemStore;
use uuid::Uuid;

use crate::dto::item::{ItemRequest, ItemResponse};
use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;

const ENTITY: &str = "Item";

#[derive(Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// All items in store order.
    pub async fn list(&self) -> AppResult<Vec<ItemResponse>> {
        tracing::info!("Listing all items");
        let items = self.store.find_all().await?;
        tracing::debug!(count = items.len(), "Fetched items");
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    /// One page of items. A page past the end is empty, not an error.
    pub async fn list_page(&self, request: PageRequest) -> AppResult<PageResponse<ItemResponse>> {
        tracing::info!(page = request.page(), size = request.size(), "Listing item page");
        let (items, total) = self
            .store
            .find_page(request.offset(), request.limit())
            .await?;
        let page = Page::new(items, request, total).map(ItemResponse::from);
        Ok(PageResponse::from(page))
    }

    pub async fn get(&self, id: DbId) -> AppResult<ItemResponse> {
        tracing::info!(id, "Fetching item");
        let item = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found(ENTITY, id))?;
        Ok(ItemResponse::from(item))
    }

    /// Persist a new item, stamping its creation time and external id.
    pub async fn create(&self, request: ItemRequest) -> AppResult<ItemResponse> {
        tracing::info!("Creating item");
        let changes = request.into_changes()?;
        let input = NewItem {
            name: changes.name,
            quantity: changes.quantity,
            active: changes.active,
            created: Utc::now(),
            uuid: Uuid::new_v4(),
        };
        let item = self.store.insert(&input).await?;
        tracing::info!(id = item.id, uuid = %item.uuid, "Item created");
        Ok(ItemResponse::from(item))
    }

    pub async fn create_response(
        &self,
        request: ItemRequest,
    ) -> AppResult<MessageResponse<ItemResponse>> {
        let item = self.create(request).await?;
        Ok(MessageResponse::new(ResponseMessage::SuccessfulAddition, item))
    }

    /// Overwrite name, quantity and active. Creation time and external id
    /// are left untouched.
    pub async fn update(&self, id: DbId, request: ItemRequest) -> AppResult<ItemResponse> {
        tracing::info!(id, "Updating item");
        let changes = request.into_changes()?;
        let item = self
            .store
            .update(id, &changes)
            .await?
            .ok_or(AppError::not_found(ENTITY, id))?;
        tracing::debug!(id, "Item updated");
        Ok(ItemResponse::from(item))
    }

    pub async fn update_response(
        &self,
        id: DbId,
        request: ItemRequest,
    ) -> AppResult<MessageResponse<ItemResponse>> {
        let item = self.update(id, request).await?;
        Ok(MessageResponse::new(ResponseMessage::SuccessfulModification, item))
    }

    /// Permanently remove an item and its details.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        tracing::info!(id, "Deleting item");
        if self.store.delete(id).await? {
            tracing::debug!(id, "Item deleted");
            Ok(())
        } else {
            Err(AppError::not_found(ENTITY, id))
        }
    }

    pub async fn delete_response(&self, id: DbId) -> AppResult<MessageResponse<String>> {
        self.delete(id).await?;
        Ok(MessageResponse::new(
            ResponseMessage::SuccessfulDeletion,
            format!("Item deleted is id :{id}"),
        ))
    }
}
