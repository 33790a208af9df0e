//! The library context: one catalog, one roster, one policy, one ledger.
//!
//! All state lives in a [`Library`] value that callers own and pass around
//! explicitly; independent libraries never share anything. Catalog and
//! roster edits are forwarded to their owners, borrowing and returning are
//! handled by the loan coordinator (see `crate::loans`).

pub mod builder;
pub mod error;
pub mod policy;

pub use builder::LibraryBuilder;
pub use error::BuildError;
pub use policy::{LoanPolicy, DEFAULT_LOAN_LIMIT};

use crate::catalog::{Book, BookPatch, Catalog, SearchField};
use crate::core::LoanLedger;
use crate::error::LibraryResult;
use crate::roster::{Member, MemberPatch, Roster};
use thiserror::Error;

/// In-memory lending engine.
///
/// Every mutating operation takes `&mut self`, so a check and the writes
/// that follow it always run as one step. To share a library between
/// threads, wrap the whole value in a single lock (for example
/// `Mutex<Library>`) so `borrow` and `return_book` stay atomic.
///
/// # Example
///
/// ```rust
/// use libris::Library;
///
/// let mut library = Library::new();
/// library.add_book("B1", "T", "A", "Non-Fiction", 2).unwrap();
/// library.add_member("M1", "N", "e@x.com").unwrap();
/// library.borrow("B1", "M1").unwrap();
///
/// assert_eq!(library.catalog().get("B1").unwrap().available_copies, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Library {
    pub(crate) catalog: Catalog,
    pub(crate) roster: Roster,
    pub(crate) policy: LoanPolicy,
    pub(crate) ledger: LoanLedger,
}

/// A broken cross-record invariant, as reported by [`Library::audit`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Inconsistency {
    #[error("{isbn:?} has {available} copies on the shelf but only owns {initial}")]
    ShelfOverflow {
        isbn: String,
        available: u32,
        initial: u32,
    },

    #[error("{isbn:?} counts {outstanding} loans but {holders} members hold it")]
    LoanCountMismatch {
        isbn: String,
        outstanding: u32,
        holders: usize,
    },

    #[error("member {member_id:?} holds {count} titles, limit is {limit}")]
    OverLimit {
        member_id: String,
        count: usize,
        limit: usize,
    },

    #[error("member {member_id:?} holds uncatalogued title {isbn:?}")]
    UnknownTitle { member_id: String, isbn: String },
}

impl Library {
    /// Create an empty library with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::new()
    }

    pub(crate) fn with_policy(policy: LoanPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Read-only view of the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only view of the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Every borrow and return applied so far.
    pub fn ledger(&self) -> &LoanLedger {
        &self.ledger
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    /// See [`Catalog::add_book`].
    pub fn add_book(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        genre: &str,
        total_copies: u32,
    ) -> LibraryResult<()> {
        traced("add_book", self.catalog.add_book(isbn, title, author, genre, total_copies))
    }

    /// See [`Catalog::update_book`].
    pub fn update_book(&mut self, isbn: &str, patch: BookPatch) -> LibraryResult<()> {
        traced("update_book", self.catalog.update_book(isbn, patch))
    }

    /// See [`Catalog::delete_book`].
    pub fn delete_book(&mut self, isbn: &str) -> LibraryResult<Book> {
        traced("delete_book", self.catalog.delete_book(isbn))
    }

    /// See [`Catalog::search_books`].
    pub fn search_books(&self, query: &str, field: SearchField) -> Vec<&Book> {
        self.catalog.search_books(query, field)
    }

    /// See [`Roster::add_member`].
    pub fn add_member(&mut self, member_id: &str, name: &str, email: &str) -> LibraryResult<()> {
        traced("add_member", self.roster.add_member(member_id, name, email))
    }

    /// See [`Roster::update_member`].
    pub fn update_member(&mut self, member_id: &str, patch: MemberPatch) -> LibraryResult<()> {
        traced("update_member", self.roster.update_member(member_id, patch))
    }

    /// See [`Roster::delete_member`].
    pub fn delete_member(&mut self, member_id: &str) -> LibraryResult<Member> {
        traced("delete_member", self.roster.delete_member(member_id))
    }

    /// Members currently holding a copy of `isbn`, in registration order.
    pub fn holders(&self, isbn: &str) -> Vec<&Member> {
        let isbn = isbn.trim();
        self.roster.iter().filter(|m| m.holds(isbn)).collect()
    }

    /// Check every cross-record invariant and report all violations.
    ///
    /// An empty result means copy counts and loan sets agree everywhere.
    pub fn audit(&self) -> Vec<Inconsistency> {
        let mut found = Vec::new();

        for book in self.catalog.iter() {
            if book.available_copies > book.initial_copies {
                found.push(Inconsistency::ShelfOverflow {
                    isbn: book.isbn.clone(),
                    available: book.available_copies,
                    initial: book.initial_copies,
                });
            }
            let holders = self.holders(&book.isbn).len();
            if book.outstanding() as usize != holders {
                found.push(Inconsistency::LoanCountMismatch {
                    isbn: book.isbn.clone(),
                    outstanding: book.outstanding(),
                    holders,
                });
            }
        }

        for member in self.roster.iter() {
            if member.loan_count() > self.policy.loan_limit {
                found.push(Inconsistency::OverLimit {
                    member_id: member.member_id.clone(),
                    count: member.loan_count(),
                    limit: self.policy.loan_limit,
                });
            }
            for isbn in &member.borrowed {
                if !self.catalog.contains(isbn) {
                    found.push(Inconsistency::UnknownTitle {
                        member_id: member.member_id.clone(),
                        isbn: isbn.clone(),
                    });
                }
            }
        }

        found
    }
}

/// Log rejected operations; successes are logged by whoever applied them.
pub(crate) fn traced<T>(operation: &'static str, result: LibraryResult<T>) -> LibraryResult<T> {
    if let Err(error) = &result {
        tracing::debug!(operation, kind = ?error.kind(), %error, "operation rejected");
    }
    result
}
