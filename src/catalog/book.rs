//! Book records and the patch type used to edit them.

use crate::core::Genre;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One catalogued title.
///
/// `available_copies <= initial_copies` always holds, and the difference is
/// the number of copies currently on loan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    /// Copies owned by the library
    pub initial_copies: u32,
    /// Copies currently on the shelf
    pub available_copies: u32,
}

impl Book {
    /// Copies currently on loan.
    pub fn outstanding(&self) -> u32 {
        self.initial_copies.saturating_sub(self.available_copies)
    }

    /// True when at least one copy can be lent.
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// True when no copy is on loan.
    pub fn is_fully_shelved(&self) -> bool {
        self.available_copies == self.initial_copies
    }
}

/// Partial update of a [`Book`].
///
/// Each field is either absent (leave unchanged) or present with a new
/// value. All present fields are validated before any is applied.
///
/// # Example
///
/// ```rust
/// use libris::catalog::BookPatch;
///
/// let patch = BookPatch::new().title("Java: From Zero").total_copies(4);
/// assert_eq!(patch.title.as_deref(), Some("Java: From Zero"));
/// assert!(patch.author.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    /// Raw genre name, checked against [`Genre::ALL`]
    pub genre: Option<String>,
    pub total_copies: Option<u32>,
}

impl BookPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn total_copies(mut self, total: u32) -> Self {
        self.total_copies = Some(total);
        self
    }

    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.genre.is_none()
            && self.total_copies.is_none()
    }
}

/// Field matched by [`Catalog::search_books`](super::Catalog::search_books).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl SearchField {
    pub(crate) fn of<'a>(&self, book: &'a Book) -> &'a str {
        match self {
            Self::Title => &book.title,
            Self::Author => &book.author,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Author => f.write_str("author"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown search field {0:?}, expected \"title\" or \"author\"")]
pub struct ParseSearchFieldError(pub String);

impl FromStr for SearchField {
    type Err = ParseSearchFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            _ => Err(ParseSearchFieldError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(initial: u32, available: u32) -> Book {
        Book {
            isbn: "B1".to_string(),
            title: "Python Basics".to_string(),
            author: "John Doe".to_string(),
            genre: Genre::NonFiction,
            initial_copies: initial,
            available_copies: available,
        }
    }

    #[test]
    fn outstanding_is_difference_of_counts() {
        assert_eq!(book(5, 3).outstanding(), 2);
        assert_eq!(book(5, 5).outstanding(), 0);
    }

    #[test]
    fn availability_flags() {
        assert!(book(1, 1).is_available());
        assert!(book(1, 1).is_fully_shelved());
        assert!(!book(1, 0).is_available());
        assert!(!book(1, 0).is_fully_shelved());
    }

    #[test]
    fn patch_builder_sets_only_given_fields() {
        let patch = BookPatch::new().genre("Mystery");
        assert_eq!(patch.genre.as_deref(), Some("Mystery"));
        assert!(patch.title.is_none());
        assert!(patch.total_copies.is_none());
        assert!(!patch.is_empty());
        assert!(BookPatch::new().is_empty());
    }

    #[test]
    fn search_field_parses_case_insensitively() {
        assert_eq!("Author".parse::<SearchField>(), Ok(SearchField::Author));
        assert_eq!("title".parse::<SearchField>(), Ok(SearchField::Title));
        assert!("isbn".parse::<SearchField>().is_err());
    }
}
