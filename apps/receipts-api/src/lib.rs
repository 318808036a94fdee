//! # Receipts API
//!
//! HTTP surface of the receipt processor.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET  /v1/health                 → {"status","version","receipts"}     │
//! │  POST /v1/receipts/process       → {"id": "<uuid>"}                    │
//! │  GET  /v1/receipts/{id}/points   → {"points": 28}                      │
//! │                                                                         │
//! │  400 INVALID_PARAM   bad field or malformed id (names the field)       │
//! │  400 BAD_REQUEST     body is not JSON                                  │
//! │  404 NOT_FOUND       unknown id                                        │
//! │  405                 wrong method on a known path                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! The first of `.env`, `/opt/receipts.dev.env` and `/opt/receipts.prod.env`
//! that loads is applied to the environment. Environment variables:
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - HTTP port (default: 8080)
//! - `LOG_FILE_PATH` - Append logs to this file instead of stdout
//! - `RUST_LOG` - Tracing filter

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
