pub mod health;
pub mod item;
pub mod item_detail;
pub mod openapi;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                      create
/// /items/all                  list
/// /items/page                 paged list
/// /items/response             create (message envelope)
/// /items/response/{id}        update, delete (message envelope)
/// /items/{id}                 get, update, delete
///
/// /details                    list, create
/// /details/response           create (message envelope)
/// /details/response/{id}      update, delete (message envelope)
/// /details/{id}               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/items", item::router())
        .nest("/details", item_detail::router())
}
