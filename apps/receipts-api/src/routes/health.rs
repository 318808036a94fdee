//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub receipts: usize,
}

/// Reports liveness and how many receipts are held.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let receipts = state.store.len()?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: state.version.clone(),
        receipts,
    }))
}
