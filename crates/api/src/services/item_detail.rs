//! ItemDetail operations.

use std::sync::Arc;

use stockroom_core::error::CoreError;
use stockroom_core::messages::ResponseMessage;
use stockroom_core::types::DbId;
use stockroom_db::models::item_detail::DetailWrite;
use stockroom_db::store::ItemDetailStore;

use crate::dto::item_detail::{ItemDetailRequest, ItemDetailResponse};
use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;

const ENTITY: &str = "ItemDetail";
const PARENT: &str = "Item";

#[derive(Clone)]
pub struct ItemDetailService {
    store: Arc<dyn ItemDetailStore>,
}

impl ItemDetailService {
    pub fn new(store: Arc<dyn ItemDetailStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<ItemDetailResponse>> {
        tracing::info!("Listing all item details");
        let rows = self.store.find_all().await?;
        tracing::debug!(count = rows.len(), "Fetched item details");
        Ok(rows.into_iter().map(ItemDetailResponse::from).collect())
    }

    pub async fn get(&self, id: DbId) -> AppResult<ItemDetailResponse> {
        tracing::info!(id, "Fetching item detail");
        let row = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found(ENTITY, id))?;
        Ok(ItemDetailResponse::from(row))
    }

    /// Persist a new detail under an existing item. Nothing is written when
    /// the referenced item does not exist.
    pub async fn create(&self, request: ItemDetailRequest) -> AppResult<ItemDetailResponse> {
        tracing::info!("Creating item detail");
        let input = request.into_new()?;
        match self.store.insert(&input).await? {
            DetailWrite::Saved(row) => {
                tracing::info!(id = row.detail.id, item_id = input.item_id, "Item detail created");
                Ok(ItemDetailResponse::from(row))
            }
            DetailWrite::ItemMissing => Err(AppError::not_found(PARENT, input.item_id)),
            DetailWrite::DetailMissing => Err(AppError::Core(CoreError::Internal(
                "insert reported a missing detail".into(),
            ))),
        }
    }

    pub async fn create_response(
        &self,
        request: ItemDetailRequest,
    ) -> AppResult<MessageResponse<ItemDetailResponse>> {
        let detail = self.create(request).await?;
        Ok(MessageResponse::new(ResponseMessage::SuccessfulAddition, detail))
    }

    /// Overwrite description, quantity and parent reference. Both the detail
    /// and the (possibly new) parent item must exist.
    pub async fn update(
        &self,
        id: DbId,
        request: ItemDetailRequest,
    ) -> AppResult<ItemDetailResponse> {
        tracing::info!(id, "Updating item detail");
        let changes = request.into_changes()?;
        match self.store.update(id, &changes).await? {
            DetailWrite::Saved(row) => {
                tracing::debug!(id, item_id = changes.item_id, "Item detail updated");
                Ok(ItemDetailResponse::from(row))
            }
            DetailWrite::DetailMissing => Err(AppError::not_found(ENTITY, id)),
            DetailWrite::ItemMissing => Err(AppError::not_found(PARENT, changes.item_id)),
        }
    }

    pub async fn update_response(
        &self,
        id: DbId,
        request: ItemDetailRequest,
    ) -> AppResult<MessageResponse<ItemDetailResponse>> {
        let detail = self.update(id, request).await?;
        Ok(MessageResponse::new(
            ResponseMessage::SuccessfulModification,
            detail,
        ))
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        tracing::info!(id, "Deleting item detail");
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(ENTITY, id))
        }
    }

    pub async fn delete_response(&self, id: DbId) -> AppResult<MessageResponse<String>> {
        self.delete(id).await?;
        Ok(MessageResponse::new(
            ResponseMessage::SuccessfulDeletion,
            format!("Item detail deleted is id :{id}"),
        ))
    }
}
