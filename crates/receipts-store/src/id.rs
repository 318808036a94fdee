//! # Identifier Generation
//!
//! Receipt identifiers come from an [`IdGenerator`] injected into the store,
//! so tests can swap the random generator for a predictable one.
//!
//! ```text
//! RandomIdGenerator      UUID v4 (122 random bits) - production default
//! SequentialIdGenerator  00000000-0000-0000-0000-000000000001, ...02, ...
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of receipt identifiers.
///
/// Implementations must be safe to call from many request handlers at once
/// without any locking by the caller.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic identifiers counting up from a starting value.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Starts at `...0001`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        SequentialIdGenerator {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::from_u128(self.next.fetch_add(1, Ordering::Relaxed) as u128)
    }
}
