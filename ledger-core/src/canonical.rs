//! Canonical serialization for cryptographic hashing
//!
//! Ensures a deterministic byte representation of block contents. Uses fixed
//! field order, big-endian integers, and fixed-scale decimals rendered as
//! length-prefixed strings, so the same block always hashes to the same
//! digest regardless of how the caller computed its values.

use crate::types::{Block, BlockHash, MONEY_SCALE};
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

/// Canonical byte writer
///
/// Writes into an in-memory buffer; all writes are infallible.
#[derive(Debug, Default)]
pub struct CanonicalSerializer {
    buffer: Vec<u8>,
}

impl CanonicalSerializer {
    /// Create new serializer
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Write raw bytes
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Write u32 (big-endian)
    pub fn write_u32(&mut self, n: u32) {
        self.write_bytes(&n.to_be_bytes());
    }

    /// Write u64 (big-endian)
    pub fn write_u64(&mut self, n: u64) {
        self.write_bytes(&n.to_be_bytes());
    }

    /// Write string (length-prefixed)
    pub fn write_string(&mut self, s: &str) {
        let bytes = s.as_bytes();
        self.write_u32(bytes.len() as u32);
        self.write_bytes(bytes);
    }

    /// Write decimal at a fixed scale
    ///
    /// The value is rounded and rescaled to exactly `scale` fractional
    /// digits before rendering, so `1580.1` and `1580.10` produce identical
    /// bytes and zero is always `0.00`.
    pub fn write_decimal(&mut self, d: &Decimal, scale: u32) {
        let mut scaled = d.round_dp(scale);
        scaled.rescale(scale);
        self.write_string(&scaled.to_string());
    }

    /// Finalize and return the buffer
    pub fn finalize(self) -> Vec<u8> {
        self.buffer
    }

    /// Compute SHA-256 over the buffer
    pub fn hash(self) -> BlockHash {
        let mut hasher = Sha256::new();
        hasher.update(&self.buffer);
        hasher.finalize().into()
    }
}

impl Block {
    /// Serialize block contents to canonical bytes (the hash preimage)
    ///
    /// Field order is fixed: index, payload fields in declaration order,
    /// previous hash. The stored hash itself is not part of the preimage.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut ser = CanonicalSerializer::new();

        ser.write_u64(self.index);
        ser.write_u32(self.payload.month);
        ser.write_decimal(&self.payload.payment, MONEY_SCALE);
        ser.write_decimal(&self.payload.principal_paid, MONEY_SCALE);
        ser.write_decimal(&self.payload.interest_paid, MONEY_SCALE);
        ser.write_decimal(&self.payload.remaining_balance, MONEY_SCALE);
        ser.write_bytes(&self.previous_hash);

        ser.finalize()
    }

    /// Recompute this block's hash from its current contents
    ///
    /// Matches the stored hash unless the block was mutated after
    /// construction; `Ledger::verify` relies on that property.
    pub fn compute_hash(&self) -> BlockHash {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_bytes());
        hasher.finalize().into()
    }
}
