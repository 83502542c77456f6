//! Handlers for the `/items` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use stockroom_core::pagination::PageResponse;
use stockroom_core::types::DbId;

use crate::dto::item::{ItemRequest, ItemResponse};
use crate::error::{AppResult, ErrorBody};
use crate::extract::{PathParam, QueryParams, ValidatedJson};
use crate::query::PageParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /items/all
#[utoipa::path(
    get,
    path = "/items/all",
    tag = "Items",
    summary = "List every item",
    responses((status = 200, description = "All items in id order", body = Vec<ItemResponse>))
)]
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<ItemResponse>>> {
    Ok(Json(state.items.list().await?))
}

/// GET /items/page?page=0&size=3
#[utoipa::path(
    get,
    path = "/items/page",
    tag = "Items",
    summary = "List items one page at a time",
    params(PageParams),
    responses(
        (status = 200, description = "One page of items", body = PageResponse<ItemResponse>),
        (status = 400, description = "Negative page or size below 1", body = ErrorBody)
    )
)]
pub async fn list_page(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PageParams>,
) -> AppResult<Json<PageResponse<ItemResponse>>> {
    let request = params.into_request()?;
    Ok(Json(state.items.list_page(request).await?))
}

/// GET /items/{id}
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    summary = "Fetch one item",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Success", body = ItemResponse),
        (status = 404, description = "No item with this id", body = ErrorBody)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<ItemResponse>> {
    Ok(Json(state.items.get(id).await?))
}

/// POST /items
#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    summary = "Create an item",
    request_body = ItemRequest,
    responses(
        (status = 201, description = "Created item", body = ItemResponse),
        (status = 400, description = "Malformed or invalid body", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ItemRequest>,
) -> AppResult<(StatusCode, Json<ItemResponse>)> {
    let item = state.items.create(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// POST /items/response
#[utoipa::path(
    post,
    path = "/items/response",
    tag = "Items",
    summary = "Create an item, wrapped in a message envelope",
    request_body = ItemRequest,
    responses(
        (status = 201, description = "Created", body = MessageResponse<ItemResponse>),
        (status = 400, description = "Malformed or invalid body", body = ErrorBody)
    )
)]
pub async fn create_with_message(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ItemRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse<ItemResponse>>)> {
    let response = state.items.create_response(input).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /items/{id}
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    summary = "Overwrite an item's name, quantity and active flag",
    params(("id" = i32, Path, description = "Item id")),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Success", body = ItemResponse),
        (status = 400, description = "Malformed or invalid body", body = ErrorBody),
        (status = 404, description = "No item with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<ItemRequest>,
) -> AppResult<Json<ItemResponse>> {
    Ok(Json(state.items.update(id, input).await?))
}

/// PUT /items/response/{id}
#[utoipa::path(
    put,
    path = "/items/response/{id}",
    tag = "Items",
    summary = "Update an item, wrapped in a message envelope",
    params(("id" = i32, Path, description = "Item id")),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Success", body = MessageResponse<ItemResponse>),
        (status = 400, description = "Malformed or invalid body", body = ErrorBody),
        (status = 404, description = "No item with this id", body = ErrorBody)
    )
)]
pub async fn update_with_message(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<ItemRequest>,
) -> AppResult<Json<MessageResponse<ItemResponse>>> {
    Ok(Json(state.items.update_response(id, input).await?))
}

/// DELETE /items/{id}
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    summary = "Delete an item and its details",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Deleted, empty body"),
        (status = 404, description = "No item with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<StatusCode> {
    state.items.delete(id).await?;
    Ok(StatusCode::OK)
}

/// DELETE /items/response/{id}
#[utoipa::path(
    delete,
    path = "/items/response/{id}",
    tag = "Items",
    summary = "Delete an item, wrapped in a message envelope",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Success", body = MessageResponse<String>),
        (status = 404, description = "No item with this id", body = ErrorBody)
    )
)]
pub async fn delete_with_message(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse<String>>> {
    Ok(Json(state.items.delete_response(id).await?))
}
