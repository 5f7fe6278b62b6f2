//! Order Store & Lifecycle Service
//!
//! Owns the authoritative in-memory order collection and the process-wide
//! id counter, and implements every operation: list/filter/paginate, get,
//! create, status transition, cancel, statistics.
//!
//! One `Mutex` guards the collection and the counter together, which keeps
//! the reference's observable behavior: read-your-writes within a process
//! and insertion order preserved for listing.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Duration, Local, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::CatalogLookup;
use crate::models::{Address, Order, OrderItem, OrderStatistics, OrderStatus};

/// Store operation error, mapped to the HTTP envelope at the gateway.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Order not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("Cannot cancel order in current status")]
    CannotCancel { status: OrderStatus },
}

/// Create request, already shape-validated at the gateway.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i64,
    pub items: Vec<NewOrderItem>,
    pub address: Address,
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub quantity: u32,
}

/// List filter: both fields AND-combined when present. `status` stays a raw
/// string on purpose: an unrecognized value matches nothing, it is not an
/// error.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub user_id: Option<i64>,
    pub status: Option<String>,
}

/// One page of the filtered sequence plus the pre-pagination count.
#[derive(Debug)]
pub struct OrderPage {
    pub orders: Vec<Order>,
    pub total: i64,
}

struct StoreInner {
    orders: Vec<Order>,
    next_seq: u64,
}

pub struct OrderStore {
    inner: Mutex<StoreInner>,
    catalog: Arc<dyn CatalogLookup>,
}

impl OrderStore {
    /// Build a store pre-populated with the two fixture orders, counter
    /// initialized past them.
    pub fn new(catalog: Arc<dyn CatalogLookup>) -> Self {
        let now = Utc::now();
        let seed = vec![
            Order {
                id: "ORD-20240101-001".to_string(),
                user_id: 1,
                status: OrderStatus::Completed,
                total_amount: Decimal::new(799900, 2),
                currency: "CNY".to_string(),
                items: vec![OrderItem {
                    product_id: 100,
                    product_name: "iPhone 15 Pro".to_string(),
                    quantity: 1,
                    unit_price: Decimal::new(799900, 2),
                    total_price: Decimal::new(799900, 2),
                }],
                shipping_address: Address {
                    name: "张三".to_string(),
                    phone: "13800138000".to_string(),
                    province: "广东省".to_string(),
                    city: "深圳市".to_string(),
                    district: "南山区".to_string(),
                    street: "科技园路1号".to_string(),
                    zip_code: "518000".to_string(),
                },
                created_at: now - Duration::hours(24),
                updated_at: now,
                paid_at: None,
            },
            Order {
                id: "ORD-20240101-002".to_string(),
                user_id: 2,
                status: OrderStatus::Pending,
                total_amount: Decimal::new(299900, 2),
                currency: "CNY".to_string(),
                items: vec![
                    OrderItem {
                        product_id: 101,
                        product_name: "AirPods Pro".to_string(),
                        quantity: 1,
                        unit_price: Decimal::new(199900, 2),
                        total_price: Decimal::new(199900, 2),
                    },
                    OrderItem {
                        product_id: 102,
                        product_name: "Apple Watch Band".to_string(),
                        quantity: 2,
                        unit_price: Decimal::new(50000, 2),
                        total_price: Decimal::new(100000, 2),
                    },
                ],
                shipping_address: Address {
                    name: "李四".to_string(),
                    phone: "13900139000".to_string(),
                    province: "北京市".to_string(),
                    city: "北京市".to_string(),
                    district: "海淀区".to_string(),
                    street: "中关村大街1号".to_string(),
                    zip_code: "100000".to_string(),
                },
                created_at: now,
                updated_at: now,
                paid_at: None,
            },
        ];

        Self {
            inner: Mutex::new(StoreInner {
                orders: seed,
                next_seq: 3,
            }),
            catalog,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // Every mutation is a whole-field write, so a poisoned guard still
        // holds consistent data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// List orders: filter first (insertion order kept), then paginate.
    ///
    /// `page`/`size` are taken as given, including zero and negatives:
    /// `start`/`end` are clamped to `[0, total]` and an inverted range
    /// degrades to an empty page, never an error.
    pub fn list(&self, filter: &OrderFilter, page: i64, size: i64) -> OrderPage {
        let inner = self.lock();
        let filtered: Vec<&Order> = inner
            .orders
            .iter()
            .filter(|o| filter.user_id.is_none_or(|uid| o.user_id == uid))
            .filter(|o| {
                filter
                    .status
                    .as_deref()
                    .is_none_or(|s| o.status.to_string() == s)
            })
            .collect();

        let total = filtered.len() as i64;
        // end is derived from the unclamped start, so a negative start
        // collapses the whole range to empty after clamping.
        let raw_start = page.saturating_sub(1).saturating_mul(size);
        let start = raw_start.clamp(0, total);
        let end = raw_start.saturating_add(size).clamp(0, total);

        let orders = if start >= end {
            Vec::new()
        } else {
            filtered[start as usize..end as usize]
                .iter()
                .map(|o| (*o).clone())
                .collect()
        };

        OrderPage { orders, total }
    }

    /// Fetch one order by exact id.
    pub fn get(&self, id: &str) -> Result<Order, StoreError> {
        self.lock()
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Create an order: allocate the next `ORD-YYYYMMDD-NNN` id, resolve
    /// items through the catalog, sum the total. The counter is process-wide
    /// and never resets per day; past 999 the number simply widens.
    pub fn create(&self, req: NewOrder) -> Result<Order, StoreError> {
        if req.items.is_empty() {
            // Rejected before any id is allocated.
            return Err(StoreError::Validation(
                "items must contain at least one entry".to_string(),
            ));
        }

        let mut inner = self.lock();
        let seq = inner.next_seq;
        inner.next_seq += 1;

        let id = format!("ORD-{}-{:03}", Local::now().format("%Y%m%d"), seq);

        let mut total_amount = Decimal::ZERO;
        let mut items = Vec::with_capacity(req.items.len());
        for item in &req.items {
            let (product_name, unit_price) = self.catalog.resolve(item.product_id);
            let total_price = unit_price * Decimal::from(item.quantity);
            total_amount += total_price;
            items.push(OrderItem {
                product_id: item.product_id,
                product_name,
                quantity: item.quantity,
                unit_price,
                total_price,
            });
        }

        let now = Utc::now();
        let order = Order {
            id: id.clone(),
            user_id: req.user_id,
            status: OrderStatus::Pending,
            total_amount,
            currency: "CNY".to_string(),
            items,
            shipping_address: req.address,
            created_at: now,
            updated_at: now,
            paid_at: None,
        };

        inner.orders.push(order.clone());
        tracing::info!(order_id = %id, user_id = req.user_id, %total_amount, "Order created");
        Ok(order)
    }

    /// Set a new status. Any status may move to any other, including a
    /// same-status write; only Cancel carries a guard. The `paid` transition
    /// rewrites `paid_at` every time, matching the reference.
    pub fn update_status(&self, id: &str, new_status: OrderStatus) -> Result<Order, StoreError> {
        let mut inner = self.lock();
        let order = inner
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(StoreError::NotFound)?;

        let now = Utc::now();
        order.status = new_status;
        order.updated_at = now;
        if new_status == OrderStatus::Paid {
            order.paid_at = Some(now);
        }

        tracing::info!(order_id = %id, status = %new_status, "Order status updated");
        Ok(order.clone())
    }

    /// Cancel an order. Blocked from `completed` and `shipped`; the order is
    /// left untouched on rejection.
    pub fn cancel(&self, id: &str) -> Result<Order, StoreError> {
        let mut inner = self.lock();
        let order = inner
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(StoreError::NotFound)?;

        if order.status.blocks_cancel() {
            return Err(StoreError::CannotCancel {
                status: order.status,
            });
        }

        order.status = OrderStatus::Cancelled;
        order.updated_at = Utc::now();
        tracing::info!(order_id = %id, "Order cancelled");
        Ok(order.clone())
    }

    /// Full-scan aggregates. `paid`/`shipped` contribute to the totals but
    /// have no dedicated counter.
    pub fn statistics(&self) -> OrderStatistics {
        let inner = self.lock();
        let mut stats = OrderStatistics {
            total_orders: inner.orders.len() as i64,
            ..Default::default()
        };
        for order in &inner.orders {
            stats.total_amount += order.total_amount;
            match order.status {
                OrderStatus::Pending => stats.pending_orders += 1,
                OrderStatus::Completed => stats.completed_orders += 1,
                OrderStatus::Cancelled => stats.cancelled_orders += 1,
                OrderStatus::Paid | OrderStatus::Shipped => {}
            }
        }
        stats
    }
}
