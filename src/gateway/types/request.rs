//! Request DTOs and validation
//!
//! Shape rules live here so an invalid body is rejected with the 400
//! envelope before any handler (or the id counter) is touched.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Address, OrderStatus};
use crate::store::{NewOrder, NewOrderItem, OrderFilter};

use super::response::ApiError;

// ============================================================================
// Create order
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[schema(example = 1)]
    pub user_id: i64,
    #[validate(length(min = 1, message = "items must contain at least one entry"), nested)]
    pub items: Vec<CreateOrderItem>,
    #[validate(nested)]
    pub address: CreateAddress,
}

#[derive(Debug, Clone, serde::Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderItem {
    #[schema(example = 100)]
    pub product_id: i64,
    /// Must be positive
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    #[schema(example = 1)]
    pub quantity: u32,
}

/// Address fields are all required except `zip_code`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAddress {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "张三")]
    pub name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    #[schema(example = "13800138000")]
    pub phone: String,
    #[validate(length(min = 1, message = "province is required"))]
    #[schema(example = "广东省")]
    pub province: String,
    #[validate(length(min = 1, message = "city is required"))]
    #[schema(example = "深圳市")]
    pub city: String,
    #[validate(length(min = 1, message = "district is required"))]
    #[schema(example = "南山区")]
    pub district: String,
    #[validate(length(min = 1, message = "street is required"))]
    #[schema(example = "科技园路1号")]
    pub street: String,
    #[serde(default)]
    #[schema(example = "518000")]
    pub zip_code: String,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        NewOrder {
            user_id: req.user_id,
            items: req
                .items
                .into_iter()
                .map(|i| NewOrderItem {
                    product_id: i.product_id,
                    quantity: i.quantity,
                })
                .collect(),
            address: Address {
                name: req.address.name,
                phone: req.address.phone,
                province: req.address.province,
                city: req.address.city,
                district: req.address.district,
                street: req.address.street,
                zip_code: req.address.zip_code,
            },
        }
    }
}

// ============================================================================
// Update status
// ============================================================================

/// `status` deserializes straight into the five-value enum; anything else
/// is a 400 at the extractor.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[schema(example = "paid")]
    pub status: OrderStatus,
}

// ============================================================================
// List query
// ============================================================================

/// Parsed list parameters, with the reference's lenient numeric handling:
/// a missing value takes the documented default, a malformed one parses to
/// zero (and is then absorbed by the pagination clamp).
#[derive(Debug)]
pub struct ListParams {
    pub page: i64,
    pub size: i64,
    pub filter: OrderFilter,
}

impl ListParams {
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let page = params
            .get("page")
            .map(|s| s.parse().unwrap_or(0))
            .unwrap_or(1);
        let size = params
            .get("size")
            .map(|s| s.parse().unwrap_or(0))
            .unwrap_or(10);

        // Empty-string params are treated as absent, like the reference.
        let user_id = params
            .get("user_id")
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<i64>().unwrap_or(0));
        let status = params
            .get("status")
            .filter(|s| !s.is_empty())
            .cloned();

        Self {
            page,
            size,
            filter: OrderFilter { user_id, status },
        }
    }
}

// ============================================================================
// ValidatedJson extractor
// ============================================================================

/// JSON extractor that rejects malformed bodies and failed field rules with
/// the 400 error envelope, so handlers only ever see valid requests.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request_with_details("Invalid request body", e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::bad_request_with_details("Invalid request body", e.to_string()))?;

        Ok(ValidatedJson(value))
    }
}
