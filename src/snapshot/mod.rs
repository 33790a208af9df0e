//! Read-only snapshots of a library for reporting.
//!
//! A snapshot is an owned copy of every record at one moment. Drivers print
//! or ship it without holding a borrow on the live library. Snapshots are
//! for reading only: nothing turns one back into a `Library`.

use crate::catalog::Book;
use crate::core::LoanLedger;
use crate::library::{Library, LoanPolicy};
use crate::roster::Member;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Point-in-time copy of a library's records.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Policy in force
    pub policy: LoanPolicy,

    /// Titles in catalog order
    pub books: Vec<Book>,

    /// Members in registration order
    pub members: Vec<Member>,

    /// Every loan event so far
    pub ledger: LoanLedger,
}

impl LibrarySnapshot {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Parse a snapshot previously produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}

impl Library {
    /// Copy every record into a snapshot. The library is not modified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use libris::Library;
    ///
    /// let mut library = Library::new();
    /// library.add_book("B1", "T", "A", "Fiction", 1).unwrap();
    ///
    /// let snapshot = library.snapshot();
    /// assert_eq!(snapshot.books.len(), 1);
    /// assert!(snapshot.to_json().unwrap().contains("\"B1\""));
    /// ```
    pub fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            policy: self.policy,
            books: self.catalog.iter().cloned().collect(),
            members: self.roster.iter().cloned().collect(),
            ledger: self.ledger.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Library {
        let mut library = Library::new();
        library
            .add_book("ISBN001", "Python Basics", "John Doe", "Non-Fiction", 2)
            .unwrap();
        library
            .add_book("ISBN002", "Learn Java", "Jane Roe", "Non-Fiction", 1)
            .unwrap();
        library.add_member("MM001", "Alice", "a@x.com").unwrap();
        library.borrow("ISBN001", "MM001").unwrap();
        library
    }

    #[test]
    fn snapshot_copies_records_in_order() {
        let library = library();
        let snapshot = library.snapshot();

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        let isbns: Vec<&str> = snapshot.books.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["ISBN001", "ISBN002"]);
        assert_eq!(snapshot.members[0].borrowed.len(), 1);
        assert_eq!(snapshot.ledger.len(), 1);
    }

    #[test]
    fn snapshots_get_distinct_ids() {
        let library = library();
        assert_ne!(library.snapshot().id, library.snapshot().id);
    }

    #[test]
    fn json_roundtrip_preserves_records() {
        let snapshot = library().snapshot();
        let json = snapshot.to_json().unwrap();
        let parsed = LibrarySnapshot::from_json(&json).unwrap();

        assert_eq!(parsed.id, snapshot.id);
        assert_eq!(parsed.books, snapshot.books);
        assert_eq!(parsed.members, snapshot.members);
    }

    #[test]
    fn rejects_unknown_version() {
        let mut snapshot = library().snapshot();
        snapshot.version = 99;
        let json = snapshot.to_json().unwrap();

        let result = LibrarySnapshot::from_json(&json);
        assert!(matches!(
            result,
            Err(SnapshotError::UnsupportedVersion {
                found: 99,
                supported: SNAPSHOT_VERSION
            })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = LibrarySnapshot::from_json("{not json").unwrap_err();
        assert!(matches!(err, SnapshotError::DeserializationFailed(_)));
        assert!(err.to_string().starts_with("snapshot JSON is malformed"));
    }
}
