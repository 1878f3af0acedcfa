//! Annuity Engine
//!
//! Computes fixed-payment amortization schedules and records them in a
//! tamper-evident hash-chained ledger (`ledger-core`).
//!
//! # Flow
//!
//! 1. **Terms**: Validate loan parameters (principal, annual rate, term)
//! 2. **Payment**: Compute the fixed monthly annuity payment
//! 3. **Schedule**: Run the amortization loop, one payment record per month
//! 4. **Ledger**: Append each record as a block; verify the chain at the end
//!
//! # Example
//!
//! ```
//! use annuity_engine::{LoanTerms, Schedule};
//!
//! fn main() -> annuity_engine::Result<()> {
//!     let schedule = Schedule::generate(LoanTerms::default())?;
//!     println!(
//!         "{} payments of {}",
//!         schedule.periods(),
//!         schedule.monthly_payment().round_dp(2)
//!     );
//!     assert!(schedule.ledger().is_valid());
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod annuity;
pub mod config;
pub mod error;
pub mod schedule;

// Re-exports
pub use annuity::monthly_payment;
pub use config::LoanTerms;
pub use error::{Error, Result};
pub use schedule::Schedule;
