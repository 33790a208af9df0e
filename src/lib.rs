//! Libris: an in-memory lending engine
//!
//! Libris keeps a catalog of book titles and a roster of members, and
//! enforces the accounting rules for who may borrow which copy and when a
//! record may be deleted. It is a plain data structure with a method API:
//! no I/O, no clock in the core, no global state.
//!
//! # Core Concepts
//!
//! - **Catalog**: book records keyed by ISBN, with owned and shelved copy counts
//! - **Roster**: member records keyed by id, each with a set of titles on loan
//! - **Loan coordinator**: `borrow`/`return_book`, which change a book's shelf
//!   count and a member's loan set together or not at all
//! - **Ledger**: append-only record of every applied borrow and return
//!
//! # Example
//!
//! ```rust
//! use libris::{BookPatch, Library};
//!
//! let mut library = Library::new();
//! library.add_book("B1", "T", "A", "Non-Fiction", 2).unwrap();
//! library.add_member("M1", "N", "e@x.com").unwrap();
//!
//! library.borrow("B1", "M1").unwrap();
//! assert_eq!(library.catalog().get("B1").unwrap().available_copies, 1);
//!
//! // Cannot shrink below the copies on loan.
//! assert!(library.update_book("B1", BookPatch::new().total_copies(0)).is_err());
//!
//! // Cannot delete while a copy is out.
//! assert!(library.delete_book("B1").is_err());
//! library.return_book("B1", "M1").unwrap();
//! assert!(library.delete_book("B1").is_ok());
//! ```

pub mod catalog;
pub mod core;
pub mod error;
pub mod library;
mod loans;
pub mod roster;
pub mod snapshot;
pub mod validation;

// Re-export commonly used types
pub use catalog::{Book, BookPatch, Catalog, SearchField};
pub use crate::core::{Genre, LoanAction, LoanEvent, LoanLedger, LoanState};
pub use error::{ErrorKind, LibraryError, LibraryResult, Violation, Violations};
pub use library::{Inconsistency, Library, LibraryBuilder, LoanPolicy, DEFAULT_LOAN_LIMIT};
pub use roster::{Member, MemberPatch, Roster};
pub use snapshot::LibrarySnapshot;
