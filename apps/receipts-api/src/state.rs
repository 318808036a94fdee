//! Shared application state.

use std::sync::Arc;

use receipts_store::ReceiptStore;

/// State handed to every route handler.
///
/// Cloning is cheap: the store is behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<ReceiptStore>,
    pub version: String,
}

impl AppState {
    pub fn new(store: Arc<ReceiptStore>) -> Self {
        AppState {
            store,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
