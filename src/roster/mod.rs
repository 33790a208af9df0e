//! The roster: member records keyed by member id.

mod member;

pub use member::{Member, MemberPatch};

use crate::error::{LibraryError, LibraryResult};
use crate::validation::rules;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Member records in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    members: IndexMap<String, Member>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a member with no loans.
    ///
    /// # Errors
    ///
    /// - `LibraryError::Invalid` if the id is blank
    /// - `LibraryError::DuplicateMember` if the id is taken
    ///
    /// # Example
    ///
    /// ```rust
    /// use libris::roster::Roster;
    ///
    /// let mut roster = Roster::new();
    /// roster.add_member("MM001", "Alice Smith", "alice@example.com").unwrap();
    /// assert!(roster.add_member("MM001", "Someone", "x@example.com").is_err());
    /// ```
    pub fn add_member(&mut self, member_id: &str, name: &str, email: &str) -> LibraryResult<()> {
        let member_id = rules::key(member_id);
        rules::enforce(vec![rules::check(&member_id)])?;
        let member_id = member_id?;

        if self.members.contains_key(&member_id) {
            return Err(LibraryError::DuplicateMember(member_id));
        }

        tracing::debug!(member_id = %member_id, "member added");
        self.members.insert(
            member_id.clone(),
            Member {
                member_id,
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                borrowed: IndexSet::new(),
            },
        );
        Ok(())
    }

    /// Apply a partial update to a member's contact details.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::MemberNotFound` if the id is not registered.
    pub fn update_member(&mut self, member_id: &str, patch: MemberPatch) -> LibraryResult<()> {
        let member_id = member_id.trim();
        let member = self
            .members
            .get_mut(member_id)
            .ok_or_else(|| LibraryError::MemberNotFound(member_id.to_string()))?;

        if let Some(name) = patch.name {
            member.name = name.trim().to_string();
        }
        if let Some(email) = patch.email {
            member.email = email.trim().to_string();
        }

        tracing::debug!(member_id = %member_id, "member updated");
        Ok(())
    }

    /// Remove a member, returning their record.
    ///
    /// # Errors
    ///
    /// - `LibraryError::MemberNotFound` if the id is not registered
    /// - `LibraryError::MemberHasLoans` while the member holds any title
    pub fn delete_member(&mut self, member_id: &str) -> LibraryResult<Member> {
        let member_id = member_id.trim();
        let member = self
            .members
            .get(member_id)
            .ok_or_else(|| LibraryError::MemberNotFound(member_id.to_string()))?;

        if member.has_loans() {
            return Err(LibraryError::MemberHasLoans {
                member_id: member_id.to_string(),
                count: member.loan_count(),
            });
        }

        tracing::debug!(member_id = %member_id, "member deleted");
        self.members
            .shift_remove(member_id)
            .ok_or_else(|| LibraryError::MemberNotFound(member_id.to_string()))
    }

    /// Look up a member by id (surrounding whitespace ignored).
    pub fn get(&self, member_id: &str) -> Option<&Member> {
        self.members.get(member_id.trim())
    }

    pub(crate) fn get_mut(&mut self, member_id: &str) -> Option<&mut Member> {
        self.members.get_mut(member_id)
    }

    pub fn contains(&self, member_id: &str) -> bool {
        self.members.contains_key(member_id.trim())
    }

    /// Iterate members in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
