// models.rs - Order domain types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order lifecycle status
///
/// The fixed five-value set; nothing outside it is ever stored.
/// Lowercase on the wire (`"pending"`, `"paid"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Cancel is rejected from these states; every other transition is
    /// allowed (the reference state machine is deliberately permissive).
    pub fn blocks_cancel(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Shipped)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// A purchase record: items, address, status, monetary total
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Order ID in `ORD-YYYYMMDD-NNN` format, immutable once assigned
    #[schema(example = "ORD-20240101-001")]
    pub id: String,
    #[schema(example = 1)]
    pub user_id: i64,
    pub status: OrderStatus,
    /// Sum of the items' total_price, computed once at creation
    #[schema(value_type = String, example = "199.99")]
    pub total_amount: Decimal,
    #[schema(example = "CNY")]
    pub currency: String,
    /// Never empty for a stored order
    pub items: Vec<OrderItem>,
    pub shipping_address: Address,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set on the first transition to `paid`, overwritten on repeats
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

/// Order line item, priced at creation time via the catalog lookup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    #[schema(example = 100)]
    pub product_id: i64,
    #[schema(example = "iPhone 15 Pro")]
    pub product_name: String,
    #[schema(example = 1)]
    pub quantity: u32,
    #[schema(value_type = String, example = "7999.00")]
    pub unit_price: Decimal,
    /// unit_price * quantity
    #[schema(value_type = String, example = "7999.00")]
    pub total_price: Decimal,
}

/// Shipping address, embedded in the order (not shared)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Address {
    #[schema(example = "张三")]
    pub name: String,
    #[schema(example = "13800138000")]
    pub phone: String,
    #[schema(example = "广东省")]
    pub province: String,
    #[schema(example = "深圳市")]
    pub city: String,
    #[schema(example = "南山区")]
    pub district: String,
    #[schema(example = "科技园路1号")]
    pub street: String,
    #[serde(default)]
    #[schema(example = "518000")]
    pub zip_code: String,
}

/// Aggregate counters, computed on demand and never stored
///
/// `paid`/`shipped` orders contribute to the totals but have no
/// dedicated counter, matching the reference.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct OrderStatistics {
    #[schema(example = 1000)]
    pub total_orders: i64,
    #[schema(value_type = String, example = "999999.99")]
    pub total_amount: Decimal,
    #[schema(example = 50)]
    pub pending_orders: i64,
    #[schema(example = 900)]
    pub completed_orders: i64,
    #[schema(example = 50)]
    pub cancelled_orders: i64,
}
