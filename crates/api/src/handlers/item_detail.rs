//! Handlers for the `/details` resource.
//!
//! Details reference their parent item by `itemId` in the request body
//! rather than by URL nesting.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stockroom_core::types::DbId;

use crate::dto::item_detail::{ItemDetailRequest, ItemDetailResponse};
use crate::error::{AppResult, ErrorBody};
use crate::extract::{PathParam, ValidatedJson};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /details
#[utoipa::path(
    get,
    path = "/details",
    tag = "Item details",
    summary = "List every item detail with its item",
    responses((status = 200, description = "Success", body = Vec<ItemDetailResponse>))
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ItemDetailResponse>>> {
    Ok(Json(state.details.list().await?))
}

/// GET /details/{id}
#[utoipa::path(
    get,
    path = "/details/{id}",
    tag = "Item details",
    summary = "Fetch one item detail",
    params(("id" = i32, Path, description = "Item detail id")),
    responses(
        (status = 200, description = "Success", body = ItemDetailResponse),
        (status = 404, description = "No detail with this id", body = ErrorBody)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<ItemDetailResponse>> {
    Ok(Json(state.details.get(id).await?))
}

/// POST /details
#[utoipa::path(
    post,
    path = "/details",
    tag = "Item details",
    summary = "Create an item detail under an existing item",
    request_body = ItemDetailRequest,
    responses(
        (status = 200, description = "Success", body = ItemDetailResponse),
        (status = 400, description = "Malformed or invalid body", body = ErrorBody),
        (status = 404, description = "Referenced item missing", body = ErrorBody)
    )
)]
///
/// Responds 200 rather than 201; existing clients depend on it.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ItemDetailRequest>,
) -> AppResult<Json<ItemDetailResponse>> {
    Ok(Json(state.details.create(input).await?))
}

/// POST /details/response
#[utoipa::path(
    post,
    path = "/details/response",
    tag = "Item details",
    summary = "Create an item detail, wrapped in a message envelope",
    request_body = ItemDetailRequest,
    responses(
        (status = 201, description = "Created", body = MessageResponse<ItemDetailResponse>),
        (status = 400, description = "Malformed or invalid body", body = ErrorBody),
        (status = 404, description = "Referenced item missing", body = ErrorBody)
    )
)]
pub async fn create_with_message(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ItemDetailRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse<ItemDetailResponse>>)> {
    let response = state.details.create_response(input).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /details/{id}
#[utoipa::path(
    put,
    path = "/details/{id}",
    tag = "Item details",
    summary = "Overwrite an item detail, possibly moving it to another item",
    params(("id" = i32, Path, description = "Item detail id")),
    request_body = ItemDetailRequest,
    responses(
        (status = 200, description = "Success", body = ItemDetailResponse),
        (status = 400, description = "Malformed or invalid body", body = ErrorBody),
        (status = 404, description = "Detail or referenced item missing", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<ItemDetailRequest>,
) -> AppResult<Json<ItemDetailResponse>> {
    Ok(Json(state.details.update(id, input).await?))
}

/// PUT /details/response/{id}
#[utoipa::path(
    put,
    path = "/details/response/{id}",
    tag = "Item details",
    summary = "Update an item detail, wrapped in a message envelope",
    params(("id" = i32, Path, description = "Item detail id")),
    request_body = ItemDetailRequest,
    responses(
        (status = 200, description = "Success", body = MessageResponse<ItemDetailResponse>),
        (status = 400, description = "Malformed or invalid body", body = ErrorBody),
        (status = 404, description = "Detail or referenced item missing", body = ErrorBody)
    )
)]
pub async fn update_with_message(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<ItemDetailRequest>,
) -> AppResult<Json<MessageResponse<ItemDetailResponse>>> {
    Ok(Json(state.details.update_response(id, input).await?))
}

/// DELETE /details/{id}
#[utoipa::path(
    delete,
    path = "/details/{id}",
    tag = "Item details",
    summary = "Delete an item detail",
    params(("id" = i32, Path, description = "Item detail id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No detail with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    state.details.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /details/response/{id}
#[utoipa::path(
    delete,
    path = "/details/response/{id}",
    tag = "Item details",
    summary = "Delete an item detail, wrapped in a message envelope",
    params(("id" = i32, Path, description = "Item detail id")),
    responses(
        (status = 200, description = "Success", body = MessageResponse<String>),
        (status = 404, description = "No detail with this id", body = ErrorBody)
    )
)]
pub async fn delete_with_message(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse<String>>> {
    Ok(Json(state.details.delete_response(id).await?))
}
