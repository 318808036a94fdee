//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (receipts-core)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds lookup and identifier failures        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in app) ← status code + JSON body                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use receipts_core::{CoreError, ValidationError};
use thiserror::Error;

/// Receipt store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The submitted receipt failed validation. Nothing was stored.
    #[error("Invalid receipt: {0}")]
    Validation(#[from] ValidationError),

    /// The identifier is not a syntactically valid receipt ID.
    #[error("Invalid receipt id: {id}")]
    InvalidId { id: String },

    /// No receipt is stored under this identifier.
    #[error("Receipt not found: {id}")]
    NotFound { id: String },

    /// The generator produced an identifier that is already taken.
    ///
    /// Fails only the insert that hit it; the existing record is untouched.
    #[error("Generated receipt id already in use: {id}")]
    DuplicateId { id: String },

    /// The store lock was poisoned by a panicking writer.
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    /// Creates an InvalidId error.
    pub fn invalid_id(id: impl Into<String>) -> Self {
        StoreError::InvalidId { id: id.into() }
    }
}

impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => StoreError::Validation(e),
        }
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
