//! # In-Memory Receipt Store
//!
//! Scored receipts keyed by identifier, kept for the life of the process.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  insert(payload)                        get / get_points(id)            │
//! │  ───────────────                        ────────────────────            │
//! │  score(payload)      ← no lock          validate_receipt_id(id) ← no lock│
//! │  ids.next_id()       ← no lock                  │                       │
//! │        │                                        ▼                       │
//! │        ▼                                 records.read()  (shared)       │
//! │  records.write()     (exclusive)                │                       │
//! │  vacant? insert : DuplicateId                   ▼                       │
//! │        │                                 clone record / NotFound        │
//! │        ▼                                                                │
//! │  clone of the new record                                               │
//! │                                                                         │
//! │  Records are never updated or removed once inserted.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lock sections contain only a map operation and a clone, so no caller
//! holds a lock across validation, scoring or identifier generation.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use receipts_core::validation::validate_receipt_id;
use receipts_core::{score, Points, Receipt, ReceiptPayload};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::id::{IdGenerator, RandomIdGenerator};

// =============================================================================
// Record
// =============================================================================

/// A scored receipt as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRecord {
    pub id: Uuid,
    pub receipt: Receipt,
    pub points: Points,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Store
// =============================================================================

/// Concurrent, process-lifetime receipt store.
///
/// Share it between request handlers as `Arc<ReceiptStore>`.
pub struct ReceiptStore {
    records: RwLock<HashMap<Uuid, ReceiptRecord>>,
    ids: Box<dyn IdGenerator>,
}

impl ReceiptStore {
    /// Creates an empty store drawing identifiers from `ids`.
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        ReceiptStore {
            records: RwLock::new(HashMap::new()),
            ids: Box::new(ids),
        }
    }

    /// Validates, scores and stores a receipt.
    ///
    /// ## Returns
    /// - `Ok(record)` with the new identifier and points
    /// - `Err(Validation)` if any field is invalid; nothing is stored
    /// - `Err(DuplicateId)` if the generator repeated an identifier
    pub fn insert(&self, payload: &ReceiptPayload) -> StoreResult<ReceiptRecord> {
        let scored = score(payload).map_err(|e| {
            let err = StoreError::from(e);
            if let StoreError::Validation(ref v) = err {
                warn!(field = v.field(), error = %v, "Rejected receipt");
            }
            err
        })?;

        debug!(breakdown = ?scored.breakdown, "Scored receipt");

        let record = ReceiptRecord {
            id: self.ids.next_id(),
            receipt: scored.receipt,
            points: scored.points,
            created_at: Utc::now(),
        };

        let mut records = self.records.write().map_err(poisoned)?;
        match records.entry(record.id) {
            Entry::Occupied(_) => {
                warn!(id = %record.id, "Generated receipt id collided");
                Err(StoreError::DuplicateId {
                    id: record.id.to_string(),
                })
            }
            Entry::Vacant(slot) => {
                info!(
                    id = %record.id,
                    retailer = %record.receipt.retailer,
                    points = %record.points,
                    "Stored receipt"
                );
                Ok(slot.insert(record).clone())
            }
        }
    }

    /// Points awarded to the receipt stored under `id`.
    pub fn get_points(&self, id: &str) -> StoreResult<Points> {
        self.with_record(id, |record| record.points)
    }

    /// The full record stored under `id`.
    pub fn get(&self, id: &str) -> StoreResult<ReceiptRecord> {
        self.with_record(id, ReceiptRecord::clone)
    }

    /// Number of stored receipts.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.records.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn with_record<T>(&self, id: &str, f: impl FnOnce(&ReceiptRecord) -> T) -> StoreResult<T> {
        let key = validate_receipt_id(id).map_err(|_| StoreError::invalid_id(id))?;

        let records = self.records.read().map_err(poisoned)?;
        match records.get(&key) {
            Some(record) => Ok(f(record)),
            None => {
                debug!(id = %key, "Receipt not found");
                Err(StoreError::not_found(id))
            }
        }
    }
}

impl Default for ReceiptStore {
    fn default() -> Self {
        ReceiptStore::new(RandomIdGenerator)
    }
}

impl std::fmt::Debug for ReceiptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiptStore")
            .field("records", &self.len().unwrap_or_default())
            .finish_non_exhaustive()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> StoreError {
    StoreError::Internal("receipt store lock poisoned".to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
