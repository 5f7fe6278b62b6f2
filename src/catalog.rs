//! Product catalog lookup seam
//!
//! Order creation resolves each requested product_id to a display name and
//! unit price through this trait. The real product catalog would sit behind
//! it; [`FixedCatalog`] reproduces the reference's placeholder behavior.

use rust_decimal::Decimal;

/// Resolves a product id to `(name, unit_price)` at order-creation time.
pub trait CatalogLookup: Send + Sync {
    fn resolve(&self, product_id: i64) -> (String, Decimal);
}

/// Placeholder catalog: `"Product {id}"` at a fixed 999.00 unit price.
#[derive(Debug, Default)]
pub struct FixedCatalog;

impl FixedCatalog {
    /// Fixed unit price used for every product (999.00)
    pub fn unit_price() -> Decimal {
        Decimal::new(99900, 2)
    }
}

impl CatalogLookup for FixedCatalog {
    fn resolve(&self, product_id: i64) -> (String, Decimal) {
        (format!("Product {}", product_id), Self::unit_price())
    }
}
