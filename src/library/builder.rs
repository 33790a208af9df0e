//! Builder for configuring a library.

use crate::library::error::BuildError;
use crate::library::policy::LoanPolicy;
use crate::library::Library;

/// Fluent builder for a [`Library`].
///
/// # Example
///
/// ```rust
/// use libris::library::LibraryBuilder;
///
/// let library = LibraryBuilder::new().loan_limit(5).build().unwrap();
/// assert_eq!(library.policy().loan_limit, 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LibraryBuilder {
    policy: LoanPolicy,
}

impl LibraryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole policy, e.g. one read from configuration.
    pub fn policy(mut self, policy: LoanPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the per-member loan limit
    pub fn loan_limit(mut self, limit: usize) -> Self {
        self.policy.loan_limit = limit;
        self
    }

    /// Build an empty library.
    /// Returns an error if the policy cannot be honoured.
    pub fn build(self) -> Result<Library, BuildError> {
        if self.policy.loan_limit == 0 {
            return Err(BuildError::ZeroLoanLimit);
        }
        Ok(Library::with_policy(self.policy))
    }
}
