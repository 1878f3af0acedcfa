//! Error types for the ledger

use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ledger errors
#[derive(Error, Debug)]
pub enum Error {
    /// Payment record failed validation at append time
    #[error("Invalid payment record: {0}")]
    InvalidPayment(String),

    /// Chain verification found a mismatch
    #[error("Ledger integrity check failed at block {height}: {reason}")]
    IntegrityFailure {
        /// Height of the first offending block
        height: u64,
        /// What check failed (stored hash, linkage, or index)
        reason: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}
