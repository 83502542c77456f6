//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router (same middleware stack as production) backed
//! by [`MemoryStore`], an in-process implementation of the store traits with
//! the same semantics as the PostgreSQL schema: id order, cascade from
//! items to details, and missing-parent detection on detail writes.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use stockroom_api::config::ServerConfig;
use stockroom_api::router::build_app_router;
use stockroom_api::state::AppState;
use stockroom_core::types::DbId;
use stockroom_db::models::item::{Item, ItemChanges, NewItem};
use stockroom_db::models::item_detail::{
    DetailWrite, ItemDetail, ItemDetailChanges, ItemDetailWithItem, NewItemDetail,
};
use stockroom_db::store::{ItemDetailStore, ItemStore, StoreHealth};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Tables {
    next_item_id: DbId,
    next_detail_id: DbId,
    items: BTreeMap<DbId, Item>,
    details: BTreeMap<DbId, ItemDetail>,
}

impl Tables {
    fn joined(&self, detail: &ItemDetail) -> Option<ItemDetailWithItem> {
        self.items.get(&detail.item_id).map(|item| ItemDetailWithItem {
            detail: detail.clone(),
            item: item.clone(),
        })
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn item_count(&self) -> usize {
        self.tables.lock().unwrap().items.len()
    }

    pub fn detail_count(&self) -> usize {
        self.tables.lock().unwrap().details.len()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Item>, sqlx::Error> {
        Ok(self.tables.lock().unwrap().items.values().cloned().collect())
    }

    async fn find_page(&self, offset: i64, limit: i64) -> Result<(Vec<Item>, i64), sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        let window = tables
            .items
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((window, tables.items.len() as i64))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        Ok(self.tables.lock().unwrap().items.get(&id).cloned())
    }

    async fn insert(&self, input: &NewItem) -> Result<Item, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_item_id += 1;
        let item = Item {
            id: tables.next_item_id,
            name: input.name.clone(),
            quantity: input.quantity,
            active: input.active,
            created: input.created,
            uuid: input.uuid,
        };
        tables.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: DbId, changes: &ItemChanges) -> Result<Option<Item>, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.items.get_mut(&id).map(|item| {
            item.name = changes.name.clone();
            item.quantity = changes.quantity;
            item.active = changes.active;
            item.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        let removed = tables.items.remove(&id).is_some();
        if removed {
            tables.details.retain(|_, d| d.item_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl ItemDetailStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<ItemDetailWithItem>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .details
            .values()
            .filter_map(|d| tables.joined(d))
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<ItemDetailWithItem>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.details.get(&id).and_then(|d| tables.joined(d)))
    }

    async fn insert(&self, input: &NewItemDetail) -> Result<DetailWrite, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.items.contains_key(&input.item_id) {
            return Ok(DetailWrite::ItemMissing);
        }
        tables.next_detail_id += 1;
        let detail = ItemDetail {
            id: tables.next_detail_id,
            description: input.description.clone(),
            quantity: input.quantity,
            item_id: input.item_id,
        };
        tables.details.insert(detail.id, detail.clone());
        Ok(tables
            .joined(&detail)
            .map_or(DetailWrite::ItemMissing, DetailWrite::Saved))
    }

    async fn update(
        &self,
        id: DbId,
        changes: &ItemDetailChanges,
    ) -> Result<DetailWrite, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.details.contains_key(&id) {
            return Ok(DetailWrite::DetailMissing);
        }
        if !tables.items.contains_key(&changes.item_id) {
            return Ok(DetailWrite::ItemMissing);
        }
        let detail = ItemDetail {
            id,
            description: changes.description.clone(),
            quantity: changes.quantity,
            item_id: changes.item_id,
        };
        tables.details.insert(id, detail.clone());
        Ok(tables
            .joined(&detail)
            .map_or(DetailWrite::ItemMissing, DetailWrite::Saved))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.tables.lock().unwrap().details.remove(&id).is_some())
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// Fresh store plus a router over it.
pub fn new_app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::default());
    let app = build_test_app(Arc::clone(&store));
    (store, app)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("POST", uri, body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("PUT", uri, body.to_string())).await
}

/// A request with an arbitrary (possibly malformed) JSON body.
pub fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST a valid item and return its id.
pub async fn create_item(app: Router, name: &str, quantity: i32) -> i64 {
    let response = post_json(
        app,
        "/items",
        serde_json::json!({"name": name, "quantity": quantity, "active": true}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
