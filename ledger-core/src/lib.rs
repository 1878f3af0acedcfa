//! Mortgage Ledger Core
//!
//! Append-only hash-chained ledger for amortization schedules.
//!
//! # Architecture
//!
//! - **Hash Chain**: Each block commits to its predecessor's hash
//! - **Single Writer**: Append takes `&mut self`, so ordering is enforced statically
//! - **Canonical Bytes**: Fixed field order and fixed decimal scale for hashing
//! - **In-Memory**: One chain per calculation run, no persistence
//!
//! # Invariants
//!
//! - Append-only: blocks are never modified or removed
//! - Deterministic hashing: same `(index, payload, previous_hash)` → same hash
//! - Contiguous indices: `chain[i].index == i`, genesis at 0
//! - Linkage: `chain[i].previous_hash == chain[i-1].hash`

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod canonical;
pub mod chain;
pub mod error;
pub mod types;

// Re-exports
pub use canonical::CanonicalSerializer;
pub use chain::Ledger;
pub use error::{Error, Result};
pub use types::{Block, BlockHash, PaymentRecord, GENESIS_PREVIOUS_HASH, MONEY_SCALE};
