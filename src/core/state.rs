//! Loan state of a single (book, member) pairing.
//!
//! Each pairing moves between two states. The transition table is pure:
//! it says which action is legal from which state and where it leads,
//! without touching any catalog or roster data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a member currently holds a copy of a given title.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanState {
    #[default]
    NotBorrowed,
    Borrowed,
}

/// Action that moves a pairing between [`LoanState`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanAction {
    Borrow,
    Return,
}

impl LoanState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotBorrowed => "NotBorrowed",
            Self::Borrowed => "Borrowed",
        }
    }

    /// Derive the state from whether the member's loan set holds the title.
    pub fn from_held(held: bool) -> Self {
        if held {
            Self::Borrowed
        } else {
            Self::NotBorrowed
        }
    }

    /// Apply an action, returning the next state if the action is legal.
    ///
    /// Borrowing an already borrowed title and returning a title that is
    /// not held are both illegal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use libris::core::{LoanAction, LoanState};
    ///
    /// assert_eq!(
    ///     LoanState::NotBorrowed.apply(LoanAction::Borrow),
    ///     Some(LoanState::Borrowed)
    /// );
    /// assert_eq!(LoanState::Borrowed.apply(LoanAction::Borrow), None);
    /// ```
    pub fn apply(self, action: LoanAction) -> Option<Self> {
        match (self, action) {
            (Self::NotBorrowed, LoanAction::Borrow) => Some(Self::Borrowed),
            (Self::Borrowed, LoanAction::Return) => Some(Self::NotBorrowed),
            _ => None,
        }
    }
}

impl fmt::Display for LoanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for LoanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrow => f.write_str("borrow"),
            Self::Return => f.write_str("return"),
        }
    }
}
