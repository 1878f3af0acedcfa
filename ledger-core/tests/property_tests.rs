//! Property-based tests for ledger invariants
//!
//! These tests use proptest to verify the chain's core properties:
//! - Deterministic hashing: same inputs → same hash
//! - Linkage: every block commits to its predecessor's hash
//! - Monotonic indexing: `chain[i].index == i`
//! - Verification: untouched chains always pass, idempotently

use ledger_core::{Block, Ledger, PaymentRecord, GENESIS_PREVIOUS_HASH};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for non-negative monetary amounts at 2 decimal places
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0u64..1_000_000_00u64).prop_map(|cents| Decimal::new(cents as i64, 2))
}

/// Strategy for a single payment record with the given month
fn record_strategy(month: u32) -> impl Strategy<Value = PaymentRecord> {
    (
        amount_strategy(),
        amount_strategy(),
        amount_strategy(),
        amount_strategy(),
    )
        .prop_map(move |(payment, principal, interest, balance)| {
            PaymentRecord::new(month, payment, principal, interest, balance)
        })
}

/// Strategy for a sequence of records with consecutive months starting at 1
fn schedule_strategy(max_len: usize) -> impl Strategy<Value = Vec<PaymentRecord>> {
    prop::collection::vec(
        (
            amount_strategy(),
            amount_strategy(),
            amount_strategy(),
            amount_strategy(),
        ),
        1..max_len,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (payment, principal, interest, balance))| {
                PaymentRecord::new(i as u32 + 1, payment, principal, interest, balance)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: block hashing is a pure function of (index, payload, previous_hash)
    #[test]
    fn prop_block_hash_deterministic(
        index in 0u64..10_000,
        record in record_strategy(1),
        prev in prop::array::uniform32(any::<u8>()),
    ) {
        let a = Block::new(index, record.clone(), prev);
        let b = Block::new(index, record, prev);
        prop_assert_eq!(a.hash(), b.hash());
    }

    /// Property: appending N records yields N+1 blocks with contiguous
    /// indices and intact previous-hash linkage
    #[test]
    fn prop_linkage_and_indexing(records in schedule_strategy(50)) {
        let mut ledger = Ledger::new();
        for record in records {
            ledger.add_payment(record).unwrap();
        }

        let blocks = ledger.blocks();
        prop_assert_eq!(blocks[0].previous_hash(), &GENESIS_PREVIOUS_HASH);
        for i in 0..blocks.len() {
            prop_assert_eq!(blocks[i].index(), i as u64);
            if i > 0 {
                prop_assert_eq!(blocks[i].previous_hash(), blocks[i - 1].hash());
            }
        }
    }

    /// Property: an untouched chain always verifies, and verification is
    /// idempotent and side-effect free
    #[test]
    fn prop_untouched_chain_is_valid(records in schedule_strategy(50)) {
        let mut ledger = Ledger::new();
        for record in records {
            ledger.add_payment(record).unwrap();
        }

        let len_before = ledger.len();
        prop_assert!(ledger.is_valid());
        prop_assert!(ledger.is_valid());
        prop_assert_eq!(ledger.len(), len_before);
    }

    /// Property: two ledgers fed the same records agree block-for-block on
    /// every hash (determinism across runs)
    #[test]
    fn prop_replay_produces_identical_hashes(records in schedule_strategy(30)) {
        let mut first = Ledger::new();
        let mut second = Ledger::new();

        for record in &records {
            first.add_payment(record.clone()).unwrap();
            second.add_payment(record.clone()).unwrap();
        }

        for (a, b) in first.blocks().iter().zip(second.blocks()) {
            prop_assert_eq!(a.hash(), b.hash());
        }
    }

    /// Property: a rejected record never advances the chain
    #[test]
    fn prop_failed_append_leaves_chain_unchanged(
        records in schedule_strategy(10),
        bad_month in 100u32..1000,
    ) {
        let mut ledger = Ledger::new();
        for record in records {
            ledger.add_payment(record).unwrap();
        }

        let len_before = ledger.len();
        let tail_hash = *ledger.tail().hash();

        let out_of_order = PaymentRecord::new(
            bad_month,
            Decimal::new(100, 2),
            Decimal::new(50, 2),
            Decimal::new(50, 2),
            Decimal::ZERO,
        );
        prop_assert!(ledger.add_payment(out_of_order).is_err());

        prop_assert_eq!(ledger.len(), len_before);
        prop_assert_eq!(ledger.tail().hash(), &tail_hash);
        prop_assert!(ledger.is_valid());
    }
}
