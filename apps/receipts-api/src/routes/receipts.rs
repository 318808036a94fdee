//! Receipt processing and points lookup endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use receipts_core::{PointsResponse, ProcessReceiptResponse, ReceiptPayload};
use serde_json::Value;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Scores and stores a receipt, returning its new identifier.
///
/// The body is read as untyped JSON first so that a field of the wrong
/// type can be reported by its path.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let Json(body) = body?;
    let payload: ReceiptPayload = serde_path_to_error::deserialize(body)?;

    let record = state.store.insert(&payload)?;

    Ok(Json(ProcessReceiptResponse {
        id: record.id.to_string(),
    }))
}

/// Returns the points awarded to a stored receipt.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    debug!(%id, "get_points");

    let points = state.store.get_points(&id)?;

    Ok(Json(PointsResponse { points }))
}
