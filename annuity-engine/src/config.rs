//! Loan terms configuration

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum supported loan term in years
pub const MAX_YEARS: u32 = 50;

/// Parameters of a fixed-rate loan
///
/// `annual_rate` is a percentage (6.5 means 6.5% per year). Terms can come
/// from CLI flags or a TOML file:
///
/// ```toml
/// principal = "250000"
/// annual_rate = "6.5"
/// years = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: Decimal,

    /// Annual interest rate in percent
    pub annual_rate: Decimal,

    /// Loan term in years
    pub years: u32,
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self {
            principal: Decimal::from(250_000),
            annual_rate: Decimal::new(65, 1), // 6.5%
            years: 30,
        }
    }
}

impl LoanTerms {
    /// Number of monthly periods over the full term
    pub fn periods(&self) -> u32 {
        self.years * 12
    }

    /// Monthly interest rate as a fraction (annual percent / 100 / 12)
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate / Decimal::from(100) / Decimal::from(12)
    }

    /// Check term-level invariants
    pub fn validate(&self) -> crate::Result<()> {
        if self.principal <= Decimal::ZERO {
            return Err(crate::Error::InvalidTerms(format!(
                "principal must be positive, got {}",
                self.principal
            )));
        }

        if self.annual_rate < Decimal::ZERO {
            return Err(crate::Error::InvalidTerms(format!(
                "annual rate must be non-negative, got {}",
                self.annual_rate
            )));
        }

        if self.years == 0 || self.years > MAX_YEARS {
            return Err(crate::Error::InvalidTerms(format!(
                "term must be between 1 and {} years, got {}",
                MAX_YEARS, self.years
            )));
        }

        Ok(())
    }

    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let terms: LoanTerms = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse loan terms: {}", e)))?;
        terms.validate()?;
        Ok(terms)
    }
}
