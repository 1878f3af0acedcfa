//! Amortization schedule generation
//!
//! Runs the month-by-month amortization loop and records each period in a
//! fresh [`Ledger`]. The running balance is carried at full precision; each
//! period's record is normalized to 2 decimal places by the ledger payload
//! before hashing, and the final balance is clamped at zero so rounding
//! residue never shows up as a negative closing balance.

use crate::{annuity, config::LoanTerms, Result};
use ledger_core::{Block, Ledger, PaymentRecord};
use rust_decimal::Decimal;

/// A fully generated amortization schedule backed by a hash-chained ledger
///
/// One schedule is produced per calculation run; it owns its ledger and is
/// handed to the display layer whole.
#[derive(Debug, Clone)]
pub struct Schedule {
    terms: LoanTerms,
    monthly_payment: Decimal,
    total_interest: Decimal,
    ledger: Ledger,
}

impl Schedule {
    /// Generate the full schedule for the given terms
    ///
    /// Aborts on the first append failure rather than producing a partial
    /// ledger; a schedule either exists completely or not at all.
    pub fn generate(terms: LoanTerms) -> Result<Self> {
        let monthly_payment = annuity::monthly_payment(&terms)?;
        let monthly_rate = terms.monthly_rate();

        tracing::info!(
            principal = %terms.principal,
            annual_rate = %terms.annual_rate,
            years = terms.years,
            payment = %monthly_payment.round_dp(2),
            "generating amortization schedule",
        );

        let mut ledger = Ledger::new();
        let mut balance = terms.principal;
        let mut total_interest = Decimal::ZERO;

        for month in 1..=terms.periods() {
            let interest = balance * monthly_rate;
            let principal_part = monthly_payment - interest;
            balance -= principal_part;
            total_interest += interest;

            let record = PaymentRecord::new(
                month,
                monthly_payment,
                principal_part,
                interest,
                balance.max(Decimal::ZERO),
            );
            ledger.add_payment(record)?;
        }

        tracing::info!(blocks = ledger.len(), "schedule recorded");

        Ok(Self {
            terms,
            monthly_payment,
            total_interest,
            ledger,
        })
    }

    /// Loan terms this schedule was generated from
    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    /// Fixed monthly payment at full precision
    pub fn monthly_payment(&self) -> Decimal {
        self.monthly_payment
    }

    /// Number of payment periods (excluding genesis)
    pub fn periods(&self) -> u32 {
        self.terms.periods()
    }

    /// Total interest paid over the full term, rounded to cents
    pub fn total_interest(&self) -> Decimal {
        self.total_interest.round_dp(2)
    }

    /// Total amount paid over the full term, rounded to cents
    pub fn total_cost(&self) -> Decimal {
        (self.monthly_payment * Decimal::from(self.periods())).round_dp(2)
    }

    /// The backing ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Payment blocks in order, genesis excluded
    pub fn payments(&self) -> impl Iterator<Item = &Block> {
        self.ledger.blocks().iter().skip(1)
    }

    /// Run the ledger's integrity check
    pub fn verify(&self) -> Result<()> {
        self.ledger.verify()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_end_to_end_standard_loan() {
        // 250000 at 6.5% over 30 years
        let schedule = Schedule::generate(LoanTerms::default()).unwrap();

        assert_eq!(schedule.monthly_payment().round_dp(2), dec!(1580.17));
        assert_eq!(schedule.ledger().len(), 361); // 360 payments + genesis

        let last = schedule.ledger().tail();
        assert_eq!(last.payload().month, 360);
        assert!(last.payload().remaining_balance <= dec!(0.01));

        assert!(schedule.ledger().is_valid());
        assert_eq!(schedule.total_interest(), dec!(318861.22));
        assert_eq!(schedule.total_cost(), dec!(568861.22));
    }

    #[test]
    fn test_zero_rate_loan() {
        let terms = LoanTerms {
            principal: dec!(250000),
            annual_rate: Decimal::ZERO,
            years: 30,
        };
        let schedule = Schedule::generate(terms).unwrap();

        // Equal principal slices, no interest at all
        assert_eq!(schedule.monthly_payment(), dec!(250000) / dec!(360));
        assert_eq!(schedule.total_interest(), Decimal::ZERO);

        for block in schedule.payments() {
            assert_eq!(block.payload().interest_paid, Decimal::ZERO);
        }

        assert!(schedule.ledger().is_valid());
        assert!(schedule.ledger().tail().payload().remaining_balance <= dec!(0.01));
    }

    #[test]
    fn test_short_loan_rows() {
        // 1200 at 0% over 1 year: 12 payments of exactly 100
        let terms = LoanTerms {
            principal: dec!(1200),
            annual_rate: Decimal::ZERO,
            years: 1,
        };
        let schedule = Schedule::generate(terms).unwrap();

        let balances: Vec<Decimal> = schedule
            .payments()
            .map(|b| b.payload().remaining_balance)
            .collect();
        assert_eq!(balances.len(), 12);
        assert_eq!(balances[0], dec!(1100.00));
        assert_eq!(balances[11], dec!(0.00));

        for block in schedule.payments() {
            assert_eq!(block.payload().payment, dec!(100.00));
            assert_eq!(block.payload().principal_paid, dec!(100.00));
        }
    }

    #[test]
    fn test_months_are_contiguous() {
        let terms = LoanTerms {
            principal: dec!(50000),
            annual_rate: dec!(5),
            years: 5,
        };
        let schedule = Schedule::generate(terms).unwrap();

        for (i, block) in schedule.payments().enumerate() {
            assert_eq!(block.payload().month as usize, i + 1);
            assert_eq!(block.index() as usize, i + 1);
        }
    }

    #[test]
    fn test_invalid_terms_produce_no_schedule() {
        let terms = LoanTerms {
            principal: Decimal::ZERO,
            ..LoanTerms::default()
        };
        assert!(Schedule::generate(terms).is_err());
    }
}
