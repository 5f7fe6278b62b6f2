//! Gateway boundary types
//!
//! - [`request`]: request DTOs, field rules, the [`ValidatedJson`] extractor
//! - [`response`]: the success/error envelope and handler result helpers

pub mod request;
pub mod response;

pub use request::{
    CreateAddress, CreateOrderItem, CreateOrderRequest, ListParams, UpdateOrderStatusRequest,
    ValidatedJson,
};
pub use response::{
    ApiError, ApiResponse, ApiResult, ErrorBody, HealthResponse, OrderListData, created, ok,
    ok_with,
};
