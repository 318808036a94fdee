//! # receipts-store: In-Memory Receipt Store
//!
//! Holds scored receipts under generated identifiers for the lifetime of the
//! process.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  receipts-api handlers                                                  │
//! │        │  Arc<ReceiptStore>                                             │
//! │        ▼                                                                │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 receipts-store (THIS CRATE)                      │  │
//! │  │                                                                  │  │
//! │  │  ReceiptStore ─── RwLock<HashMap<Uuid, ReceiptRecord>>           │  │
//! │  │       │                                                          │  │
//! │  │       └── Box<dyn IdGenerator>  (Random | Sequential)            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  receipts-core: validation + points                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipts_core::{ItemPayload, ReceiptPayload};
//! use receipts_store::{ReceiptStore, SequentialIdGenerator};
//!
//! let store = ReceiptStore::new(SequentialIdGenerator::new());
//! let record = store
//!     .insert(&ReceiptPayload {
//!         retailer: Some("Target".into()),
//!         purchase_date: Some("2022-01-02".into()),
//!         purchase_time: Some("13:01".into()),
//!         total: Some("5.05".into()),
//!         items: Some(vec![ItemPayload {
//!             short_description: Some("Mountain Dew 12PK".into()),
//!             price: Some("5.05".into()),
//!         }]),
//!     })
//!     .unwrap();
//!
//! let points = store.get_points(&record.id.to_string()).unwrap();
//! assert_eq!(points.value(), 6);
//! ```

pub mod error;
pub mod id;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use memory::{ReceiptRecord, ReceiptStore};
