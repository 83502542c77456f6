//! HTTP-level integration tests for the `/details` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, create_item, delete, get, new_app, post_json, put_json};
use serde_json::json;

/// POST a valid detail under `item_id` and return its id.
async fn create_detail(app: axum::Router, item_id: i64, description: &str) -> i64 {
    let response = post_json(
        app,
        "/details",
        json!({"description": description, "quantity": 2, "itemId": item_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_detail_returns_200_with_nested_item() {
    let (_, app) = new_app();
    let item_id = create_item(app.clone(), "Desk", 4).await;

    let response = post_json(
        app,
        "/details",
        json!({"description": "Walnut top", "quantity": 1, "itemId": item_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["description"], "Walnut top");
    assert_eq!(json["quantity"], 1);
    assert_eq!(json["responseDTO"]["id"], item_id);
    assert_eq!(json["responseDTO"]["name"], "Desk");
    assert!(json["responseDTO"]["uuid"].is_string());
    assert!(json.get("item").is_none());
}

#[tokio::test]
async fn test_create_under_missing_item_returns_404_and_writes_nothing() {
    let (store, app) = new_app();
    let response = post_json(
        app,
        "/details",
        json!({"description": "Orphan", "quantity": 1, "itemId": 777}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], 404);
    assert_eq!(json["message"], "Item with id 777 not found");
    assert_eq!(store.detail_count(), 0);
}

#[tokio::test]
async fn test_list_and_get_details() {
    let (_, app) = new_app();
    let item_id = create_item(app.clone(), "Lamp", 2).await;
    let first = create_detail(app.clone(), item_id, "Bulb").await;
    create_detail(app.clone(), item_id, "Shade").await;

    let list = body_json(get(app.clone(), "/details").await).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["description"], "Bulb");
    assert_eq!(list[1]["responseDTO"]["name"], "Lamp");

    let one = get(app, &format!("/details/{first}")).await;
    assert_eq!(one.status(), StatusCode::OK);
    assert_eq!(body_json(one).await["description"], "Bulb");
}

#[tokio::test]
async fn test_get_missing_detail_returns_404() {
    let (_, app) = new_app();
    let response = get(app, "/details/31337").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "ItemDetail with id 31337 not found"
    );
}

#[tokio::test]
async fn test_missing_fields_are_reported_by_wire_name() {
    let (store, app) = new_app();
    let response = post_json(app, "/details", json!({"description": "   "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let errors = body_json(response).await["errors"].clone();
    assert_eq!(errors["description"], "Description is required");
    assert_eq!(errors["quantity"], "Quantity is required");
    assert_eq!(errors["itemId"], "Item id is required");
    assert_eq!(store.detail_count(), 0);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_can_repoint_parent() {
    let (_, app) = new_app();
    let chair = create_item(app.clone(), "Chair", 1).await;
    let table = create_item(app.clone(), "Table", 1).await;
    let detail = create_detail(app.clone(), chair, "Leg").await;

    let response = put_json(
        app,
        &format!("/details/{detail}"),
        json!({"description": "Table leg", "quantity": 4, "itemId": table}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], detail);
    assert_eq!(json["description"], "Table leg");
    assert_eq!(json["quantity"], 4);
    assert_eq!(json["responseDTO"]["name"], "Table");
}

#[tokio::test]
async fn test_update_to_missing_parent_returns_404_and_keeps_row() {
    let (_, app) = new_app();
    let item_id = create_item(app.clone(), "Sofa", 1).await;
    let detail = create_detail(app.clone(), item_id, "Cushion").await;

    let response = put_json(
        app.clone(),
        &format!("/details/{detail}"),
        json!({"description": "Cushion", "quantity": 1, "itemId": 9999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "Item with id 9999 not found"
    );

    let unchanged = body_json(get(app, &format!("/details/{detail}")).await).await;
    assert_eq!(unchanged["responseDTO"]["id"], item_id);
}

#[tokio::test]
async fn test_update_missing_detail_returns_404() {
    let (_, app) = new_app();
    let item_id = create_item(app.clone(), "Rug", 1).await;

    let response = put_json(
        app,
        "/details/555",
        json!({"description": "Fringe", "quantity": 1, "itemId": item_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "ItemDetail with id 555 not found"
    );
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_returns_204_then_404() {
    let (store, app) = new_app();
    let item_id = create_item(app.clone(), "Shelf", 1).await;
    let detail = create_detail(app.clone(), item_id, "Bracket").await;

    let response = delete(app.clone(), &format!("/details/{detail}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
    assert_eq!(store.detail_count(), 0);
    assert_eq!(store.item_count(), 1);

    let again = delete(app, &format!("/details/{detail}")).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_item_removes_its_details() {
    let (store, app) = new_app();
    let kept = create_item(app.clone(), "Kept", 1).await;
    let doomed = create_item(app.clone(), "Doomed", 1).await;
    create_detail(app.clone(), kept, "Stays").await;
    let gone = create_detail(app.clone(), doomed, "Goes").await;

    let response = delete(app.clone(), &format!("/items/{doomed}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.detail_count(), 1);

    let fetch = get(app, &format!("/details/{gone}")).await;
    assert_eq!(fetch.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Message envelope variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_detail_message_variants() {
    let (_, app) = new_app();
    let item_id = create_item(app.clone(), "Bench", 1).await;

    let created = post_json(
        app.clone(),
        "/details/response",
        json!({"description": "Slat", "quantity": 6, "itemId": item_id}),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    assert_eq!(created["message"], "Added successfully");
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["responseDTO"]["id"], item_id);

    let updated = put_json(
        app.clone(),
        &format!("/details/response/{id}"),
        json!({"description": "Slat", "quantity": 8, "itemId": item_id}),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = body_json(updated).await;
    assert_eq!(updated["message"], "Modification completed successfully");
    assert_eq!(updated["data"]["quantity"], 8);

    let deleted = delete(app, &format!("/details/response/{id}")).await;
    assert_eq!(deleted.status(), StatusCode::OK);
    let deleted = body_json(deleted).await;
    assert_eq!(deleted["message"], "Deletion completed successfully");
    assert_eq!(deleted["data"], format!("Item detail deleted is id :{id}"));
}
