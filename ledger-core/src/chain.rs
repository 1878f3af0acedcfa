//! Hash-chained ledger
//!
//! This module ties blocks into an append-only chain rooted at a genesis
//! block and provides the integrity walk that makes the chain tamper-evident.
//!
//! # Example
//!
//! ```
//! use ledger_core::{Ledger, PaymentRecord};
//! use rust_decimal::Decimal;
//!
//! fn main() -> ledger_core::Result<()> {
//!     let mut ledger = Ledger::new();
//!
//!     let record = PaymentRecord::new(
//!         1,
//!         Decimal::new(158017, 2),
//!         Decimal::new(22621, 2),
//!         Decimal::new(135396, 2),
//!         Decimal::new(24977379, 2),
//!     );
//!     let block = ledger.add_payment(record)?;
//!     println!("appended {}", block);
//!
//!     assert!(ledger.is_valid());
//!     Ok(())
//! }
//! ```

use crate::{
    types::{Block, PaymentRecord, GENESIS_PREVIOUS_HASH},
    Error, Result,
};

/// Append-only sequence of hash-linked blocks
///
/// One ledger is built per calculation run and lives entirely in memory.
/// Append is the only mutating operation; it takes `&mut self`, so the
/// single-writer requirement is enforced by the borrow checker.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Ordered blocks, genesis at position 0
    chain: Vec<Block>,
}

impl Ledger {
    /// Create a ledger containing only the genesis block
    ///
    /// Genesis has index 0, a zeroed sentinel payload, and the all-zero
    /// previous hash.
    pub fn new() -> Self {
        let genesis = Block::new(0, PaymentRecord::genesis(), GENESIS_PREVIOUS_HASH);
        tracing::debug!(hash = %genesis.hash_hex(), "created genesis block");

        Self {
            chain: vec![genesis],
        }
    }

    /// Append one period's payment record
    ///
    /// Validates the record, derives the block index from the current chain
    /// length, links to the tail hash, and appends. Returns the new block so
    /// the caller can display its hash immediately.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPayment`] if a monetary field is negative or the
    /// record's month does not match the position it would occupy.
    pub fn add_payment(&mut self, payload: PaymentRecord) -> Result<&Block> {
        self.validate_payment(&payload)?;

        let index = self.chain.len() as u64;
        let previous_hash = *self.tail().hash();
        let block = Block::new(index, payload, previous_hash);

        tracing::debug!(index, hash = %block.short_hash(), "appending block");
        self.chain.push(block);

        Ok(self.tail())
    }

    /// Walk the chain and check every integrity invariant
    ///
    /// For each block: the stored hash must match a recomputation from the
    /// block's contents, the index must equal the position, and (past
    /// genesis) the stored previous hash must equal the prior block's stored
    /// hash. Stops at the first failure and reports its height.
    ///
    /// No side effects; safe to call at any time.
    pub fn verify(&self) -> Result<()> {
        for (i, block) in self.chain.iter().enumerate() {
            let height = i as u64;

            if block.index() != height {
                return Err(Error::IntegrityFailure {
                    height,
                    reason: format!("index {} does not match position", block.index()),
                });
            }

            if block.compute_hash() != *block.hash() {
                return Err(Error::IntegrityFailure {
                    height,
                    reason: "stored hash does not match block contents".to_string(),
                });
            }

            if i > 0 && block.previous_hash() != self.chain[i - 1].hash() {
                return Err(Error::IntegrityFailure {
                    height,
                    reason: "previous-hash link does not match prior block".to_string(),
                });
            }
        }

        Ok(())
    }

    /// User-facing integrity indicator
    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }

    /// Read-only view of the chain, genesis first
    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    /// The most recently appended block
    pub fn tail(&self) -> &Block {
        self.chain
            .last()
            .expect("chain always contains the genesis block")
    }

    /// Number of blocks, including genesis
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always false: the genesis block exists from construction
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Check append-time invariants for a payment record
    fn validate_payment(&self, payload: &PaymentRecord) -> Result<()> {
        payload.validate()?;

        // Month must line up with the index the block will be stored at,
        // keeping payloads consistent with chain positions.
        let expected_month = self.chain.len() as u32;
        if payload.month != expected_month {
            return Err(Error::InvalidPayment(format!(
                "month {} out of order, expected {}",
                payload.month, expected_month
            )));
        }

        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
