//! The catalog: book records keyed by ISBN.
//!
//! The catalog validates and applies edits to its own records. Copy counts
//! only move through `update_book` (resizing a title) and through the loan
//! coordinator (lending and returning single copies).

mod book;

pub use book::{Book, BookPatch, ParseSearchFieldError, SearchField};

use crate::error::{LibraryError, LibraryResult};
use crate::validation::rules;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Book records in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    books: IndexMap<String, Book>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalogue a new title with `total_copies` copies, all on the shelf.
    ///
    /// # Errors
    ///
    /// - `LibraryError::Invalid` listing every bad field: blank ISBN,
    ///   unknown genre, zero copies
    /// - `LibraryError::DuplicateBook` if the ISBN is already catalogued
    ///
    /// # Example
    ///
    /// ```rust
    /// use libris::catalog::Catalog;
    ///
    /// let mut catalog = Catalog::new();
    /// catalog
    ///     .add_book("ISBN001", " Python Basics ", "John Doe", "Non-Fiction", 5)
    ///     .unwrap();
    ///
    /// let book = catalog.get("ISBN001").unwrap();
    /// assert_eq!(book.title, "Python Basics");
    /// assert_eq!(book.available_copies, 5);
    /// ```
    pub fn add_book(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        genre: &str,
        total_copies: u32,
    ) -> LibraryResult<()> {
        let isbn = rules::key(isbn);
        let genre = rules::genre(genre);
        rules::enforce(vec![
            rules::check(&isbn),
            rules::check(&genre),
            rules::new_copies(total_copies),
        ])?;
        let isbn = isbn?;
        let genre = genre?;

        if self.books.contains_key(&isbn) {
            return Err(LibraryError::DuplicateBook(isbn));
        }

        tracing::debug!(isbn = %isbn, copies = total_copies, "book added");
        self.books.insert(
            isbn.clone(),
            Book {
                isbn,
                title: title.trim().to_string(),
                author: author.trim().to_string(),
                genre,
                initial_copies: total_copies,
                available_copies: total_copies,
            },
        );
        Ok(())
    }

    /// Apply a partial update to an existing title.
    ///
    /// Every field in the patch is validated before any is written. A new
    /// copy count keeps the loans already out: the shelf count becomes
    /// `total_copies - outstanding`.
    ///
    /// # Errors
    ///
    /// - `LibraryError::BookNotFound` if the ISBN is not catalogued
    /// - `LibraryError::Invalid` for an unknown genre or a copy count below
    ///   the number of copies on loan
    pub fn update_book(&mut self, isbn: &str, patch: BookPatch) -> LibraryResult<()> {
        let isbn = isbn.trim();
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| LibraryError::BookNotFound(isbn.to_string()))?;

        let outstanding = book.outstanding();
        let genre = patch.genre.as_deref().map(rules::genre);

        let mut checks = Vec::new();
        if let Some(genre) = &genre {
            checks.push(rules::check(genre));
        }
        if let Some(total) = patch.total_copies {
            checks.push(rules::resized_copies(total, outstanding));
        }
        rules::enforce(checks)?;

        if let Some(genre) = genre {
            book.genre = genre?;
        }
        if let Some(title) = patch.title {
            book.title = title.trim().to_string();
        }
        if let Some(author) = patch.author {
            book.author = author.trim().to_string();
        }
        if let Some(total) = patch.total_copies {
            book.initial_copies = total;
            book.available_copies = total - outstanding;
        }

        tracing::debug!(isbn = %isbn, "book updated");
        Ok(())
    }

    /// Remove a title from the catalog, returning its record.
    ///
    /// # Errors
    ///
    /// - `LibraryError::BookNotFound` if the ISBN is not catalogued
    /// - `LibraryError::OutstandingLoans` while any copy is on loan
    pub fn delete_book(&mut self, isbn: &str) -> LibraryResult<Book> {
        let isbn = isbn.trim();
        let book = self
            .books
            .get(isbn)
            .ok_or_else(|| LibraryError::BookNotFound(isbn.to_string()))?;

        if !book.is_fully_shelved() {
            return Err(LibraryError::OutstandingLoans {
                isbn: isbn.to_string(),
                outstanding: book.outstanding(),
            });
        }

        tracing::debug!(isbn = %isbn, "book deleted");
        self.books
            .shift_remove(isbn)
            .ok_or_else(|| LibraryError::BookNotFound(isbn.to_string()))
    }

    /// Case-insensitive substring search on title or author.
    ///
    /// A blank query matches nothing. Results follow catalog insertion order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use libris::catalog::{Catalog, SearchField};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.add_book("B1", "Python Basics", "John Doe", "Non-Fiction", 1).unwrap();
    /// catalog.add_book("B2", "Advanced Python", "Jane Roe", "Non-Fiction", 1).unwrap();
    ///
    /// let hits = catalog.search_books("PYTHON", SearchField::Title);
    /// assert_eq!(hits.len(), 2);
    /// assert_eq!(hits[0].isbn, "B1");
    ///
    /// assert!(catalog.search_books("   ", SearchField::Title).is_empty());
    /// ```
    pub fn search_books(&self, query: &str, field: SearchField) -> Vec<&Book> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.books
            .values()
            .filter(|book| field.of(book).to_lowercase().contains(&query))
            .collect()
    }

    /// Look up a title by ISBN (surrounding whitespace ignored).
    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn.trim())
    }

    pub(crate) fn get_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.books.get_mut(isbn)
    }

    pub fn contains(&self, isbn: &str) -> bool {
        self.books.contains_key(isbn.trim())
    }

    /// Iterate titles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
