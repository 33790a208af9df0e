//! Error types for catalog, roster and loan operations.

use std::fmt;
use thiserror::Error;

/// Coarse classification of a [`LibraryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input: blank key, unknown genre, bad copy count
    Validation,
    /// Key already in use
    Conflict,
    /// Referenced book or member does not exist
    NotFound,
    /// No copy left, or member at the loan limit
    Capacity,
    /// Operation not legal in the current loan state
    StateConflict,
}

/// A single problem with one input field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("identifier must not be blank")]
    BlankKey,

    #[error("unknown genre {0:?}")]
    UnknownGenre(String),

    #[error("a new title needs at least one copy")]
    NoCopies,

    #[error("total copies ({requested}) below outstanding loans ({outstanding})")]
    BelowOutstanding { requested: u32, outstanding: u32 },
}

/// Every violation found while validating one call. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, violation: &Violation) -> bool {
        self.0.contains(violation)
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Errors returned by library operations.
///
/// A failed operation never leaves a partial mutation behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LibraryError {
    #[error("invalid input: {0}")]
    Invalid(Violations),

    #[error("a book with ISBN {0:?} already exists")]
    DuplicateBook(String),

    #[error("a member with id {0:?} already exists")]
    DuplicateMember(String),

    #[error("no book with ISBN {0:?}")]
    BookNotFound(String),

    #[error("no member with id {0:?}")]
    MemberNotFound(String),

    #[error("no copies of {0:?} available")]
    NoCopiesAvailable(String),

    #[error("member {member_id:?} already holds {limit} loans")]
    LoanLimitReached { member_id: String, limit: usize },

    #[error("member {member_id:?} already holds {isbn:?}")]
    AlreadyBorrowed { isbn: String, member_id: String },

    #[error("member {member_id:?} does not hold {isbn:?}")]
    NotBorrowed { isbn: String, member_id: String },

    #[error("{isbn:?} has {outstanding} copies on loan")]
    OutstandingLoans { isbn: String, outstanding: u32 },

    #[error("member {member_id:?} still holds {count} loans")]
    MemberHasLoans { member_id: String, count: usize },
}

impl LibraryError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Invalid(_) => ErrorKind::Validation,
            Self::DuplicateBook(_) | Self::DuplicateMember(_) => ErrorKind::Conflict,
            Self::BookNotFound(_) | Self::MemberNotFound(_) => ErrorKind::NotFound,
            Self::NoCopiesAvailable(_) | Self::LoanLimitReached { .. } => ErrorKind::Capacity,
            Self::AlreadyBorrowed { .. }
            | Self::NotBorrowed { .. }
            | Self::OutstandingLoans { .. }
            | Self::MemberHasLoans { .. } => ErrorKind::StateConflict,
        }
    }
}

impl From<Violation> for LibraryError {
    fn from(violation: Violation) -> Self {
        Self::Invalid(Violations(vec![violation]))
    }
}

pub type LibraryResult<T> = Result<T, LibraryError>;
