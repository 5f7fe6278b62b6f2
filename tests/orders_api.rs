//! End-to-end API tests driving the assembled router in-process.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use order_service::gateway::{self, state::AppState};
use order_service::{AppConfig, FixedCatalog, OrderStore};

fn test_app() -> Router {
    let mut config = AppConfig::default();
    config.swagger.enabled = false;
    let store = Arc::new(OrderStore::new(Arc::new(FixedCatalog)));
    gateway::app(&config, Arc::new(AppState::new(store)))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn valid_create_body() -> Value {
    json!({
        "user_id": 42,
        "items": [
            {"product_id": 100, "quantity": 2},
            {"product_id": 200, "quantity": 1}
        ],
        "address": {
            "name": "王五",
            "phone": "13700137000",
            "province": "上海市",
            "city": "上海市",
            "district": "浦东新区",
            "street": "世纪大道100号"
        }
    })
}

#[tokio::test]
async fn health_returns_bare_status_object() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "order-service");
    assert!(body["time"].is_string());
    // Not enveloped.
    assert!(body.get("code").is_none());
}

#[tokio::test]
async fn list_returns_seed_orders_in_insertion_order() {
    let app = test_app();
    let (status, body) = get(&app, "/api/v3/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "success");
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["size"], 10);
    let orders = body["data"]["orders"].as_array().unwrap();
    assert_eq!(orders[0]["id"], "ORD-20240101-001");
    assert_eq!(orders[1]["id"], "ORD-20240101-002");
}

#[tokio::test]
async fn list_filters_by_user_and_status() {
    let app = test_app();

    let (_, body) = get(&app, "/api/v3/orders?user_id=1").await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["orders"][0]["user_id"], 1);

    let (_, body) = get(&app, "/api/v3/orders?user_id=2&status=pending").await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["orders"][0]["id"], "ORD-20240101-002");

    // Unrecognized status value matches nothing, it is not an error.
    let (status, body) = get(&app, "/api/v3/orders?status=refunded").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 0);
    assert!(body["data"]["orders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_paginates_after_filtering() {
    let app = test_app();
    let (_, body) = get(&app, "/api/v3/orders?page=2&size=1").await;
    assert_eq!(body["data"]["total"], 2);
    let orders = body["data"]["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], "ORD-20240101-002");
}

#[tokio::test]
async fn list_page_beyond_range_is_empty_not_an_error() {
    let app = test_app();
    let (status, body) = get(&app, "/api/v3/orders?page=99&size=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 2);
    assert!(body["data"]["orders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_malformed_numbers_degrade_to_empty_page() {
    let app = test_app();
    // Malformed values parse to zero; the clamp turns that into an empty
    // slice rather than a fault.
    let (status, body) = get(&app, "/api/v3/orders?page=abc&size=xyz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["page"], 0);
    assert_eq!(body["data"]["size"], 0);
    assert_eq!(body["data"]["total"], 2);
    assert!(body["data"]["orders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn statistics_route_is_not_captured_as_an_id() {
    let app = test_app();
    let (status, body) = get(&app, "/api/v3/orders/statistics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["total_orders"], 2);
    assert_eq!(body["data"]["pending_orders"], 1);
    assert_eq!(body["data"]["completed_orders"], 1);
    assert_eq!(body["data"]["cancelled_orders"], 0);
    assert_eq!(body["data"]["total_amount"], "10998.00");
}

#[tokio::test]
async fn get_order_by_id() {
    let app = test_app();
    let (status, body) = get(&app, "/api/v3/orders/ORD-20240101-001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "ORD-20240101-001");
    assert_eq!(body["data"]["status"], "completed");
    assert_eq!(body["data"]["total_amount"], "7999.00");
    assert_eq!(body["data"]["currency"], "CNY");
}

#[tokio::test]
async fn get_unknown_order_is_404_with_no_data() {
    let app = test_app();
    let (status, body) = get(&app, "/api/v3/orders/ORD-20240101-999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "Order not found");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn create_order_prices_items_through_catalog() {
    let app = test_app();
    let (status, body) = send_json(&app, "POST", "/api/v3/orders", valid_create_body()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "Order created successfully");

    let data = &body["data"];
    assert!(data["id"].as_str().unwrap().starts_with("ORD-"));
    assert!(data["id"].as_str().unwrap().ends_with("-003"));
    assert_eq!(data["user_id"], 42);
    assert_eq!(data["status"], "pending");
    // 2 * 999.00 + 1 * 999.00
    assert_eq!(data["total_amount"], "2997.00");
    assert_eq!(data["items"][0]["product_name"], "Product 100");
    assert_eq!(data["items"][0]["unit_price"], "999.00");
    assert_eq!(data["items"][0]["total_price"], "1998.00");
    assert!(data.get("paid_at").is_none());
}

#[tokio::test]
async fn create_with_empty_items_is_rejected_without_consuming_an_id() {
    let app = test_app();
    let mut invalid = valid_create_body();
    invalid["items"] = json!([]);

    let (status, body) = send_json(&app, "POST", "/api/v3/orders", invalid).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Invalid request body");
    assert!(body["details"].is_string());

    // Counter did not move: the next create still gets sequence 3.
    let (_, body) = send_json(&app, "POST", "/api/v3/orders", valid_create_body()).await;
    assert!(body["data"]["id"].as_str().unwrap().ends_with("-003"));
}

#[tokio::test]
async fn create_with_missing_address_field_is_400() {
    let app = test_app();
    let mut invalid = valid_create_body();
    invalid["address"].as_object_mut().unwrap().remove("name");

    let (status, body) = send_json(&app, "POST", "/api/v3/orders", invalid).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body");
}

#[tokio::test]
async fn create_with_zero_quantity_is_400() {
    let app = test_app();
    let mut invalid = valid_create_body();
    invalid["items"][0]["quantity"] = json!(0);

    let (status, _) = send_json(&app, "POST", "/api/v3/orders", invalid).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_status_to_paid_sets_paid_at() {
    let app = test_app();
    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/v3/orders/ORD-20240101-002/status",
        json!({"status": "paid"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order status updated successfully");
    assert_eq!(body["data"]["status"], "paid");
    assert!(body["data"]["paid_at"].is_string());
}

#[tokio::test]
async fn update_status_rejects_unknown_value() {
    let app = test_app();
    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/v3/orders/ORD-20240101-002/status",
        json!({"status": "refunded"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Invalid request body");
}

#[tokio::test]
async fn update_status_unknown_order_is_404() {
    let app = test_app();
    let (status, _) = send_json(
        &app,
        "PUT",
        "/api/v3/orders/ORD-19990101-001/status",
        json!({"status": "paid"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cancel_pending_order_succeeds() {
    let app = test_app();
    let (status, body) =
        send_json(&app, "POST", "/api/v3/orders/ORD-20240101-002/cancel", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order cancelled successfully");
    assert_eq!(body["data"]["status"], "cancelled");
}

#[tokio::test]
async fn cancel_completed_order_is_400_and_leaves_it_unchanged() {
    let app = test_app();
    let (status, body) =
        send_json(&app, "POST", "/api/v3/orders/ORD-20240101-001/cancel", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Cannot cancel order in current status");

    let (_, body) = get(&app, "/api/v3/orders/ORD-20240101-001").await;
    assert_eq!(body["data"]["status"], "completed");
}

#[tokio::test]
async fn cancel_unknown_order_is_404() {
    let app = test_app();
    let (status, _) =
        send_json(&app, "POST", "/api/v3/orders/ORD-19990101-001/cancel", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn statistics_reflect_created_and_cancelled_orders() {
    let app = test_app();

    // One new pending order, one new order cancelled right away.
    send_json(&app, "POST", "/api/v3/orders", valid_create_body()).await;
    let (_, created) = send_json(&app, "POST", "/api/v3/orders", valid_create_body()).await;
    let id = created["data"]["id"].as_str().unwrap();
    send_json(&app, "POST", &format!("/api/v3/orders/{}/cancel", id), json!({})).await;

    let (_, body) = get(&app, "/api/v3/orders/statistics").await;
    assert_eq!(body["data"]["total_orders"], 4);
    assert_eq!(body["data"]["pending_orders"], 2);
    assert_eq!(body["data"]["completed_orders"], 1);
    assert_eq!(body["data"]["cancelled_orders"], 1);
}
