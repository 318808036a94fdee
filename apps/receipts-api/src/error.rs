//! # API Error Type
//!
//! Maps store and request errors onto HTTP responses.
//!
//! ```text
//! StoreError::Validation   ──► 400 INVALID_PARAM  (field = offending field)
//! StoreError::InvalidId    ──► 400 INVALID_PARAM  (field = "id")
//! StoreError::NotFound     ──► 404 NOT_FOUND
//! field of the wrong type  ──► 400 INVALID_PARAM  (field = JSON path)
//! JsonRejection            ──► 400 BAD_REQUEST
//! DuplicateId / Internal   ──► 500 INTERNAL
//! ```
//!
//! ## Response Body
//! ```json
//! {
//!   "code": "INVALID_PARAM",
//!   "message": "purchaseTime must be between 0 and 23",
//!   "field": "purchaseTime"
//! }
//! ```

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use receipts_core::validation::ID_FIELD;
use receipts_core::ValidationError;
use receipts_store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Body is JSON but a field has the wrong type.
    #[error("Invalid receipt: {0}")]
    InvalidParam(ValidationError),

    #[error("Malformed request body: {0}")]
    BadRequest(String),
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A named field failed validation (400)
    InvalidParam,

    /// Body is not a JSON receipt (400)
    BadRequest,

    /// Unknown receipt (404)
    NotFound,

    /// Anything else (500)
    Internal,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, ErrorCode, Option<String>) {
        match self {
            ApiError::Store(StoreError::Validation(e)) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidParam,
                Some(e.field().to_string()),
            ),
            ApiError::InvalidParam(e) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidParam,
                Some(e.field().to_string()),
            ),
            ApiError::Store(StoreError::InvalidId { .. }) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidParam,
                Some(ID_FIELD.to_string()),
            ),
            ApiError::Store(StoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, None)
            }
            ApiError::Store(StoreError::DuplicateId { .. } | StoreError::Internal(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Internal, None)
            }
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, ErrorCode::BadRequest, None),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ApiError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let reason = err.into_inner().to_string();

        // "." is the document root: the body is not an object at all
        if path == "." {
            ApiError::BadRequest(reason)
        } else {
            ApiError::InvalidParam(ValidationError::invalid_format(path, reason))
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, field) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            code,
            message: self.to_string(),
            field,
        };

        (status, Json(body)).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;
