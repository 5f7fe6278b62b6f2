//! API response envelope and error types
//!
//! Every endpoint except `/health` wraps its payload:
//! - success: `{code: 0, message, data}`
//! - error:   `{code: <http status>, message, details?}` with no `data`

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Order;
use crate::store::StoreError;

/// Unified success envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// 0 on success
    #[schema(example = 0)]
    pub code: i32,
    #[schema(example = "success")]
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 0,
            message: message.into(),
            data,
        }
    }
}

/// Error envelope body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Mirrors the HTTP status code
    #[schema(example = 400)]
    pub code: i32,
    #[schema(example = "Bad Request")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Invalid parameters")]
    pub details: Option<String>,
}

/// Handler error carrying the HTTP status it maps to.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request_with_details(
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            details: None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::not_found("Order not found"),
            StoreError::Validation(msg) => ApiError::bad_request(msg),
            // Conflict class, surfaced as 400 like the reference
            StoreError::CannotCancel { .. } => {
                ApiError::bad_request("Cannot cancel order in current status")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorBody {
            code: self.status.as_u16() as i32,
            message: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

/// Handler result: status + enveloped payload, or an enveloped error.
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// 200 with the plain "success" message
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

/// 200 with an operation-specific message
pub fn ok_with<T>(message: impl Into<String>, data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::with_message(message, data))))
}

/// 201 with an operation-specific message
pub fn created<T>(message: impl Into<String>, data: T) -> ApiResult<T> {
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(message, data)),
    ))
}

/// List endpoint payload: the page slice plus echoed paging inputs.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListData {
    #[schema(example = 100)]
    pub total: i64,
    #[schema(example = 1)]
    pub page: i64,
    #[schema(example = 10)]
    pub size: i64,
    pub orders: Vec<Order>,
}

/// Liveness payload, returned bare (not enveloped).
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "order-service")]
    pub service: String,
    /// Server time, RFC 3339
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub time: String,
}
