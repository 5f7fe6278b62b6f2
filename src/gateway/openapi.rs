//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8002/docs`
//! - OpenAPI JSON: `http://localhost:8002/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::types::{
    CreateAddress, CreateOrderItem, CreateOrderRequest, ErrorBody, HealthResponse, OrderListData,
    UpdateOrderStatusRequest,
};
use crate::models::{Address, Order, OrderItem, OrderStatistics, OrderStatus};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "3.0.0",
        description = "Order management service: creation, querying, lifecycle transitions and statistics over an in-memory store.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8002", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::order::get_orders,
        crate::gateway::handlers::order::get_order_statistics,
        crate::gateway::handlers::order::get_order,
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::order::update_order_status,
        crate::gateway::handlers::order::cancel_order,
    ),
    components(
        schemas(
            Order,
            OrderItem,
            OrderStatus,
            Address,
            OrderStatistics,
            CreateOrderRequest,
            CreateOrderItem,
            CreateAddress,
            UpdateOrderStatusRequest,
            OrderListData,
            HealthResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "Orders", description = "Order creation, querying and lifecycle management"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
