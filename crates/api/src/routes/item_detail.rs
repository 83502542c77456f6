//! Route definitions for the `/details` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::item_detail;
use crate::state::AppState;

/// Routes mounted at `/details`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// POST   /response          -> create_with_message
/// PUT    /response/{id}     -> update_with_message
/// DELETE /response/{id}     -> delete_with_message
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(item_detail::list).post(item_detail::create))
        .route("/response", post(item_detail::create_with_message))
        .route(
            "/response/{id}",
            put(item_detail::update_with_message).delete(item_detail::delete_with_message),
        )
        .route(
            "/{id}",
            get(item_detail::get_by_id)
                .put(item_detail::update)
                .delete(item_detail::delete),
        )
}
