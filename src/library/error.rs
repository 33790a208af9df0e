//! Errors raised while configuring a library.

use thiserror::Error;

/// Errors that can occur when building a [`Library`](super::Library).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Loan limit must be at least 1")]
    ZeroLoanLimit,
}
