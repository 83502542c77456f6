//! Route definitions for the `/items` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::item;
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// POST   /                  -> create
/// GET    /all               -> list_all
/// GET    /page              -> list_page
/// POST   /response          -> create_with_message
/// PUT    /response/{id}     -> update_with_message
/// DELETE /response/{id}     -> delete_with_message
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(item::create))
        .route("/all", get(item::list_all))
        .route("/page", get(item::list_page))
        .route("/response", post(item::create_with_message))
        .route(
            "/response/{id}",
            put(item::update_with_message).delete(item::delete_with_message),
        )
        .route(
            "/{id}",
            get(item::get_by_id).put(item::update).delete(item::delete),
        )
}
