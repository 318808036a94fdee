//! API route handlers

pub mod health;
pub mod receipts;

use axum::{routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/v1/health", get(health::health_check))
        // Receipt endpoints
        .route("/v1/receipts/process", post(receipts::process_receipt))
        .route("/v1/receipts/{id}/points", get(receipts::get_points))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
