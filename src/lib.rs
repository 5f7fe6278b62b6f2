//! order-service - Demonstration order-management REST API
//!
//! An in-memory order store with CRUD-style endpoints: list/filter/paginate,
//! fetch by id, create, status transitions, cancel, and aggregate statistics.
//!
//! # Modules
//!
//! - [`models`] - Order, OrderItem, Address, OrderStatus, OrderStatistics
//! - [`store`] - The order store & lifecycle service (collection + id counter)
//! - [`catalog`] - Product lookup seam used at order creation
//! - [`gateway`] - Axum HTTP surface (handlers, envelope types, OpenAPI)
//! - [`config`] - YAML per-environment configuration
//! - [`logging`] - tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod store;

// Convenient re-exports at crate root
pub use catalog::{CatalogLookup, FixedCatalog};
pub use config::AppConfig;
pub use models::{Address, Order, OrderItem, OrderStatistics, OrderStatus};
pub use store::{NewOrder, NewOrderItem, OrderFilter, OrderPage, OrderStore, StoreError};
