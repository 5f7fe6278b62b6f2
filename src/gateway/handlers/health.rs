//! Health check handler

use axum::Json;
use chrono::Utc;

use super::super::types::HealthResponse;

/// Liveness endpoint
///
/// Everything is memory-resident, so there are no dependencies to probe;
/// the response is the bare status object, not the envelope.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "order-service".to_string(),
        time: Utc::now().to_rfc3339(),
    })
}
