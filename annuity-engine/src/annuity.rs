//! Fixed-payment annuity formula
//!
//! Computes the constant monthly payment `P * r * (1+r)^n / ((1+r)^n - 1)`
//! for monthly rate `r` and `n` periods, with an exact `P / n` branch for
//! zero-rate loans. All arithmetic is `Decimal`; the compounding factor is
//! built by iterated multiplication (n is at most 600), which keeps the
//! result deterministic without pulling in floating point.

use crate::{config::LoanTerms, Result};
use rust_decimal::Decimal;

/// Compute the fixed monthly payment for the given loan terms
///
/// Returns the full-precision payment; callers round for display, and the
/// ledger payload normalizes to 2 decimal places before hashing.
pub fn monthly_payment(terms: &LoanTerms) -> Result<Decimal> {
    terms.validate()?;

    let periods = Decimal::from(terms.periods());
    let rate = terms.monthly_rate();

    if rate.is_zero() {
        // No compounding term: equal principal slices
        return Ok(terms.principal / periods);
    }

    let growth = compound_factor(rate, terms.periods());
    Ok(terms.principal * (rate * growth) / (growth - Decimal::ONE))
}

/// `(1 + rate)^n` by iterated multiplication
fn compound_factor(rate: Decimal, n: u32) -> Decimal {
    let base = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..n {
        factor *= base;
    }
    factor
}
