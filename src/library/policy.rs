//! Lending policy.

use serde::{Deserialize, Serialize};

/// Maximum number of distinct titles a member may hold at once, unless
/// configured otherwise.
pub const DEFAULT_LOAN_LIMIT: usize = 3;

/// Tunable lending rules.
///
/// Deserializes from partial input; missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use libris::library::{LoanPolicy, DEFAULT_LOAN_LIMIT};
///
/// let policy: LoanPolicy = serde_json::from_str("{}").unwrap();
/// assert_eq!(policy.loan_limit, DEFAULT_LOAN_LIMIT);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanPolicy {
    /// Titles a single member may hold simultaneously
    pub loan_limit: usize,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            loan_limit: DEFAULT_LOAN_LIMIT,
        }
    }
}
