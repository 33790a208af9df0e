//! Member records and the patch type used to edit them.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A library member and the titles they currently hold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: String,
    pub name: String,
    pub email: String,
    /// ISBNs on loan, in borrowing order
    pub borrowed: IndexSet<String>,
}

impl Member {
    /// True if the member holds a copy of `isbn`.
    pub fn holds(&self, isbn: &str) -> bool {
        self.borrowed.contains(isbn)
    }

    /// Number of titles on loan.
    pub fn loan_count(&self) -> usize {
        self.borrowed.len()
    }

    pub fn has_loans(&self) -> bool {
        !self.borrowed.is_empty()
    }
}

/// Partial update of a [`Member`]. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl MemberPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
