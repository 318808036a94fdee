//! # receipts-core: Pure Business Logic for the Receipt Processor
//!
//! This crate is the **heart** of the receipt processor. It turns a raw
//! receipt payload into a validated [`Receipt`] and awards [`Points`] for it,
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipts-api (axum HTTP layer)                  │   │
//! │  │   POST /v1/receipts/process    GET /v1/receipts/{id}/points     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              receipts-store (RwLock<HashMap>)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipts-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │  points   │  │   │
//! │  │   │  Receipt  │  │   Money   │  │  parsers  │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire payloads, validated Receipt, Points
//! - [`money`] - Money type parsed exactly from decimal strings
//! - [`validation`] - Strict field parsers
//! - [`points`] - The points rule engine
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same receipt = same points
//! 2. **Integer Money**: amounts are cents, never floats
//! 3. **Explicit Errors**: every failure names the offending field

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use points::{breakdown, calculate_points, score, PointsBreakdown, ScoredReceipt};
pub use types::*;
