//! HTTP gateway: router assembly and server startup.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use state::AppState;

/// Build the full application router.
///
/// Separated from [`run_server`] so tests can drive it in-process.
pub fn app(config: &AppConfig, state: Arc<AppState>) -> Router {
    // `/orders/statistics` is registered ahead of `/orders/{id}` so the
    // literal segment is never captured as an id.
    let orders = Router::new()
        .route(
            "/orders",
            get(handlers::get_orders).post(handlers::create_order),
        )
        .route("/orders/statistics", get(handlers::get_order_statistics))
        .route("/orders/{id}", get(handlers::get_order))
        .route("/orders/{id}/status", put(handlers::update_order_status))
        .route("/orders/{id}/cancel", post(handlers::cancel_order));

    let mut app = Router::new()
        .route("/health", get(handlers::health_check))
        .nest(&config.server.base_path, orders)
        .with_state(state);

    if config.swagger.enabled {
        app = app.merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        );
    }

    app
}

/// Bind and serve until the process is stopped.
pub async fn run_server(config: &AppConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = app(config, state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Order Service listening on http://{}", addr);
    tracing::info!("Environment: {}", config.server.environment);
    tracing::info!("API base path: {}", config.server.base_path);
    if config.swagger.enabled {
        tracing::info!("Swagger UI: http://{}/docs", addr);
    }

    axum::serve(listener, app)
        .await
        .context("Server error")?;
    Ok(())
}
