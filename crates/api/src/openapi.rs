//! OpenAPI document for the HTTP API, served at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::dto::item::{ItemRequest, ItemResponse};
use crate::dto::item_detail::{ItemDetailRequest, ItemDetailResponse};
use crate::error::ErrorBody;
use crate::handlers::{item, item_detail};
use crate::routes::health::{self, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stockroom API",
        description = "Manage inventory items and their item details."
    ),
    paths(
        item::list_all,
        item::list_page,
        item::get_by_id,
        item::create,
        item::create_with_message,
        item::update,
        item::update_with_message,
        item::delete,
        item::delete_with_message,
        item_detail::list,
        item_detail::get_by_id,
        item_detail::create,
        item_detail::create_with_message,
        item_detail::update,
        item_detail::update_with_message,
        item_detail::delete,
        item_detail::delete_with_message,
        health::health_check,
    ),
    components(schemas(
        ItemRequest,
        ItemResponse,
        ItemDetailRequest,
        ItemDetailResponse,
        ErrorBody,
        HealthResponse,
    )),
    tags(
        (name = "Items", description = "Create, read, update and delete items"),
        (name = "Item details", description = "Details attached to an item"),
        (name = "Health", description = "Service liveness")
    )
)]
pub struct ApiDoc;
