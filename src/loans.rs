//! Loan coordination: lending and returning single copies.
//!
//! A loan is recorded twice, as a lower shelf count on the book and as an
//! entry in the member's loan set. Both sides are changed together, and only
//! after every precondition has passed, so a rejected call changes nothing.

use crate::core::{LoanAction, LoanState};
use crate::error::{LibraryError, LibraryResult};
use crate::library::{traced, Library};

impl Library {
    /// Lend one copy of `isbn` to `member_id`.
    ///
    /// Preconditions, checked in this order:
    /// 1. the title exists
    /// 2. a copy is on the shelf
    /// 3. the member exists
    /// 4. the member is below the loan limit
    /// 5. the member does not already hold this title
    ///
    /// # Errors
    ///
    /// `BookNotFound`, `NoCopiesAvailable`, `MemberNotFound`,
    /// `LoanLimitReached` or `AlreadyBorrowed`, matching the first failed
    /// precondition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use libris::Library;
    ///
    /// let mut library = Library::new();
    /// library.add_book("B1", "T", "A", "Mystery", 1).unwrap();
    /// library.add_member("M1", "N", "m1@x.com").unwrap();
    /// library.add_member("M2", "N", "m2@x.com").unwrap();
    ///
    /// assert!(library.borrow("B1", "M1").is_ok());
    /// assert!(library.borrow("B1", "M2").is_err()); // no copy left
    /// ```
    pub fn borrow(&mut self, isbn: &str, member_id: &str) -> LibraryResult<()> {
        traced("borrow", self.lend(isbn.trim(), member_id.trim()))
    }

    /// Take back `member_id`'s copy of `isbn`.
    ///
    /// The shelf count goes up by one but never past the number of copies
    /// the library owns.
    ///
    /// # Errors
    ///
    /// `BookNotFound`, `MemberNotFound`, or `NotBorrowed` when the member
    /// does not hold the title.
    pub fn return_book(&mut self, isbn: &str, member_id: &str) -> LibraryResult<()> {
        traced("return_book", self.take_back(isbn.trim(), member_id.trim()))
    }

    fn lend(&mut self, isbn: &str, member_id: &str) -> LibraryResult<()> {
        let limit = self.policy.loan_limit;

        let book = self
            .catalog
            .get_mut(isbn)
            .ok_or_else(|| LibraryError::BookNotFound(isbn.to_string()))?;
        if !book.is_available() {
            return Err(LibraryError::NoCopiesAvailable(isbn.to_string()));
        }

        let member = self
            .roster
            .get_mut(member_id)
            .ok_or_else(|| LibraryError::MemberNotFound(member_id.to_string()))?;
        if member.loan_count() >= limit {
            return Err(LibraryError::LoanLimitReached {
                member_id: member_id.to_string(),
                limit,
            });
        }

        let from = LoanState::from_held(member.holds(isbn));
        let to = from
            .apply(LoanAction::Borrow)
            .ok_or_else(|| LibraryError::AlreadyBorrowed {
                isbn: isbn.to_string(),
                member_id: member_id.to_string(),
            })?;

        book.available_copies -= 1;
        member.borrowed.insert(isbn.to_string());
        self.ledger.push(isbn, member_id, LoanAction::Borrow, from, to);

        tracing::debug!(isbn, member_id, "copy lent");
        Ok(())
    }

    fn take_back(&mut self, isbn: &str, member_id: &str) -> LibraryResult<()> {
        let book = self
            .catalog
            .get_mut(isbn)
            .ok_or_else(|| LibraryError::BookNotFound(isbn.to_string()))?;

        let member = self
            .roster
            .get_mut(member_id)
            .ok_or_else(|| LibraryError::MemberNotFound(member_id.to_string()))?;

        let from = LoanState::from_held(member.holds(isbn));
        let to = from
            .apply(LoanAction::Return)
            .ok_or_else(|| LibraryError::NotBorrowed {
                isbn: isbn.to_string(),
                member_id: member_id.to_string(),
            })?;

        member.borrowed.shift_remove(isbn);
        book.available_copies = book
            .available_copies
            .saturating_add(1)
            .min(book.initial_copies);
        self.ledger.push(isbn, member_id, LoanAction::Return, from, to);

        tracing::debug!(isbn, member_id, "copy returned");
        Ok(())
    }
}
