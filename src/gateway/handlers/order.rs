//! Order endpoints (list, get, create, status update, cancel, statistics)

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};

use crate::models::{Order, OrderStatistics};

use super::super::state::AppState;
use super::super::types::{
    ApiResult, CreateOrderRequest, ErrorBody, ListParams, OrderListData,
    UpdateOrderStatusRequest, ValidatedJson, created, ok, ok_with,
};

/// List orders with optional filters and pagination
///
/// GET /api/v3/orders
#[utoipa::path(
    get,
    path = "/api/v3/orders",
    params(
        ("page" = Option<i64>, Query, description = "1-based page number (default: 1)"),
        ("size" = Option<i64>, Query, description = "Page size (default: 10)"),
        ("user_id" = Option<i64>, Query, description = "Filter by purchasing user"),
        ("status" = Option<String>, Query, description = "Filter by status (pending/paid/shipped/completed/cancelled)")
    ),
    responses(
        (status = 200, description = "Page of orders", body = OrderListData, content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn get_orders(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<OrderListData> {
    let ListParams { page, size, filter } = ListParams::from_query(&params);
    tracing::debug!(page, size, ?filter, "List orders");

    let result = state.store.list(&filter, page, size);
    ok(OrderListData {
        total: result.total,
        page,
        size,
        orders: result.orders,
    })
}

/// Get one order by id
///
/// GET /api/v3/orders/{id}
#[utoipa::path(
    get,
    path = "/api/v3/orders/{id}",
    params(
        ("id" = String, Path, description = "Order ID (ORD-YYYYMMDD-NNN)")
    ),
    responses(
        (status = 200, description = "Order details", body = Order, content_type = "application/json"),
        (status = 404, description = "Order not found", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Order> {
    let order = state.store.get(&id)?;
    ok(order)
}

/// Create an order
///
/// POST /api/v3/orders
#[utoipa::path(
    post,
    path = "/api/v3/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = Order, content_type = "application/json"),
        (status = 400, description = "Invalid request body", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateOrderRequest>,
) -> ApiResult<Order> {
    tracing::info!(user_id = req.user_id, items = req.items.len(), "Create order");
    let order = state.store.create(req.into())?;
    created("Order created successfully", order)
}

/// Update an order's status
///
/// PUT /api/v3/orders/{id}/status
#[utoipa::path(
    put,
    path = "/api/v3/orders/{id}/status",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order updated", body = Order, content_type = "application/json"),
        (status = 400, description = "Invalid request body or status value", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateOrderStatusRequest>,
) -> ApiResult<Order> {
    let order = state.store.update_status(&id, req.status)?;
    ok_with("Order status updated successfully", order)
}

/// Cancel an order
///
/// POST /api/v3/orders/{id}/cancel
#[utoipa::path(
    post,
    path = "/api/v3/orders/{id}/cancel",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order cancelled", body = Order, content_type = "application/json"),
        (status = 400, description = "Order status blocks cancellation", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn cancel_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Order> {
    let order = state.store.cancel(&id)?;
    ok_with("Order cancelled successfully", order)
}

/// Aggregate order statistics
///
/// GET /api/v3/orders/statistics
#[utoipa::path(
    get,
    path = "/api/v3/orders/statistics",
    responses(
        (status = 200, description = "Aggregate counters", body = OrderStatistics, content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn get_order_statistics(
    State(state): State<Arc<AppState>>,
) -> ApiResult<OrderStatistics> {
    ok(state.store.statistics())
}
