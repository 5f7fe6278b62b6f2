use std::sync::Arc;

use crate::store::OrderStore;

/// Shared gateway state, handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The order store (collection + id counter behind one lock)
    pub store: Arc<OrderStore>,
}

impl AppState {
    pub fn new(store: Arc<OrderStore>) -> Self {
        Self { store }
    }
}
