//! Core types for the ledger
//!
//! All types are designed for:
//! - Deterministic hashing (canonical serialization, fixed decimal scale)
//! - Memory safety (no unsafe code)
//! - Exact arithmetic (Decimal for money)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed decimal scale for all monetary fields (2 = cents)
pub const MONEY_SCALE: u32 = 2;

/// 32-byte SHA-256 digest
pub type BlockHash = [u8; 32];

/// Sentinel previous-hash for the genesis block
pub const GENESIS_PREVIOUS_HASH: BlockHash = [0u8; 32];

/// One period's payment data — the block payload
///
/// All monetary fields are normalized to [`MONEY_SCALE`] decimal places at
/// construction so the hash preimage is identical across re-runs with the
/// same loan parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Month number (1-based for real payments, 0 for genesis)
    pub month: u32,

    /// Total payment for the period
    pub payment: Decimal,

    /// Portion of the payment applied to principal
    pub principal_paid: Decimal,

    /// Portion of the payment applied to interest
    pub interest_paid: Decimal,

    /// Outstanding balance after this payment
    pub remaining_balance: Decimal,
}

impl PaymentRecord {
    /// Create a payment record, rounding every monetary field to
    /// [`MONEY_SCALE`] decimal places (banker's rounding)
    pub fn new(
        month: u32,
        payment: Decimal,
        principal_paid: Decimal,
        interest_paid: Decimal,
        remaining_balance: Decimal,
    ) -> Self {
        Self {
            month,
            payment: payment.round_dp(MONEY_SCALE),
            principal_paid: principal_paid.round_dp(MONEY_SCALE),
            interest_paid: interest_paid.round_dp(MONEY_SCALE),
            remaining_balance: remaining_balance.round_dp(MONEY_SCALE),
        }
    }

    /// Zeroed sentinel payload for the genesis block
    pub fn genesis() -> Self {
        Self {
            month: 0,
            payment: Decimal::ZERO,
            principal_paid: Decimal::ZERO,
            interest_paid: Decimal::ZERO,
            remaining_balance: Decimal::ZERO,
        }
    }

    /// Check field-level invariants: all monetary values non-negative
    ///
    /// Decimal has no non-finite values, so unlike a float payload there is
    /// no NaN/infinity case to reject.
    pub fn validate(&self) -> crate::Result<()> {
        let fields = [
            ("payment", self.payment),
            ("principal_paid", self.principal_paid),
            ("interest_paid", self.interest_paid),
            ("remaining_balance", self.remaining_balance),
        ];

        for (name, value) in fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(crate::Error::InvalidPayment(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// One immutable, hash-sealed record in the chain
///
/// The hash is computed exactly once, at construction, over the canonical
/// serialization of `(index, payload, previous_hash)`. Fields are only
/// readable from outside the crate, so there is no external mutation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Ordinal position in the chain (0 = genesis)
    pub(crate) index: u64,

    /// Payment data for this period
    pub(crate) payload: PaymentRecord,

    /// Hash of the preceding block ([`GENESIS_PREVIOUS_HASH`] for genesis)
    pub(crate) previous_hash: BlockHash,

    /// SHA-256 over the canonical bytes of this block's contents
    pub(crate) hash: BlockHash,
}

impl Block {
    /// Construct a block and seal its hash
    ///
    /// Pure and deterministic: identical inputs always produce an identical
    /// hash, across invocations and process restarts.
    pub fn new(index: u64, payload: PaymentRecord, previous_hash: BlockHash) -> Self {
        let mut block = Self {
            index,
            payload,
            previous_hash,
            hash: [0u8; 32],
        };
        block.hash = block.compute_hash();
        block
    }

    /// Ordinal position in the chain
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Payment data for this period
    pub fn payload(&self) -> &PaymentRecord {
        &self.payload
    }

    /// Hash of the preceding block
    pub fn previous_hash(&self) -> &BlockHash {
        &self.previous_hash
    }

    /// This block's stored hash
    pub fn hash(&self) -> &BlockHash {
        &self.hash
    }

    /// Stored hash as lowercase hex
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// Truncated hash prefix for compact display (12 hex chars)
    pub fn short_hash(&self) -> String {
        let full = self.hash_hex();
        format!("{}...", &full[..12])
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block #{} [{}]", self.index, self.short_hash())
    }
}
