//! HTTP handlers: thin adapters from axum extractors to the order store.

pub mod health;
pub mod order;

pub use health::health_check;
pub use order::{
    cancel_order, create_order, get_order, get_order_statistics, get_orders, update_order_status,
};
