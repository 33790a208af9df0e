//! End-to-end lending scenarios against the public API.

use libris::{
    BookPatch, ErrorKind, Library, LibraryError, LoanState, MemberPatch, SearchField,
};

fn available(library: &Library, isbn: &str) -> u32 {
    library.catalog().get(isbn).unwrap().available_copies
}

#[test]
fn borrow_decrements_shelf_count() {
    let mut library = Library::new();
    assert!(library.add_book("B1", "T", "A", "Non-Fiction", 2).is_ok());
    assert!(library.add_member("M1", "N", "e@x.com").is_ok());
    assert!(library.borrow("B1", "M1").is_ok());

    assert_eq!(available(&library, "B1"), 1);
}

#[test]
fn last_copy_cannot_be_lent_twice() {
    let mut library = Library::new();
    library.add_book("B1", "T", "A", "Fiction", 1).unwrap();
    library.add_member("M1", "N", "m1@x.com").unwrap();
    library.add_member("M2", "N", "m2@x.com").unwrap();
    library.borrow("B1", "M1").unwrap();
    assert_eq!(available(&library, "B1"), 0);

    assert!(library.borrow("B1", "M2").is_err());
}

#[test]
fn fourth_distinct_title_is_refused() {
    let mut library = Library::new();
    for isbn in ["B1", "B2", "B3", "B4"] {
        library.add_book(isbn, "T", "A", "Mystery", 5).unwrap();
    }
    library.add_member("M1", "N", "e@x.com").unwrap();

    for isbn in ["B1", "B2", "B3"] {
        assert!(library.borrow(isbn, "M1").is_ok());
    }
    let err = library.borrow("B4", "M1").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Capacity);
    assert_eq!(available(&library, "B4"), 5);
}

#[test]
fn same_member_cannot_borrow_same_title_twice() {
    let mut library = Library::new();
    library.add_book("B1", "T", "A", "Fiction", 3).unwrap();
    library.add_member("M1", "N", "e@x.com").unwrap();

    assert!(library.borrow("B1", "M1").is_ok());
    let err = library.borrow("B1", "M1").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::StateConflict);
    assert_eq!(available(&library, "B1"), 2);
}

#[test]
fn cannot_shrink_below_outstanding_loans() {
    let mut library = Library::new();
    library.add_book("B1", "T", "A", "Fiction", 1).unwrap();
    library.add_member("M1", "N", "e@x.com").unwrap();
    library.borrow("B1", "M1").unwrap();

    let err = library
        .update_book("B1", BookPatch::new().total_copies(0))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    let book = library.catalog().get("B1").unwrap();
    assert_eq!(book.initial_copies, 1);
    assert_eq!(book.available_copies, 0);
}

#[test]
fn delete_waits_for_return() {
    let mut library = Library::new();
    library.add_book("B1", "T", "A", "Fiction", 1).unwrap();
    library.add_member("M1", "N", "e@x.com").unwrap();
    library.borrow("B1", "M1").unwrap();

    assert!(library.delete_book("B1").is_err());
    assert!(library.return_book("B1", "M1").is_ok());
    assert!(library.delete_book("B1").is_ok());
    assert!(library.catalog().is_empty());
}

#[test]
fn member_delete_waits_for_all_returns() {
    let mut library = Library::new();
    library.add_book("B1", "T", "A", "Fiction", 1).unwrap();
    library.add_book("B2", "T", "A", "Fiction", 1).unwrap();
    library.add_member("M1", "N", "e@x.com").unwrap();
    library.borrow("B1", "M1").unwrap();
    library.borrow("B2", "M1").unwrap();

    assert!(matches!(
        library.delete_member("M1"),
        Err(LibraryError::MemberHasLoans { count: 2, .. })
    ));
    library.return_book("B1", "M1").unwrap();
    assert!(library.delete_member("M1").is_err());
    library.return_book("B2", "M1").unwrap();
    assert!(library.delete_member("M1").is_ok());
}

#[test]
fn full_lending_session() {
    let mut library = Library::new();

    // Add books and members
    assert!(library.add_book("B001", "Python Basics", "John Doe", "Non-Fiction", 3).is_ok());
    assert!(library.add_book("B002", "Advanced Python", "Jane Roe", "Non-Fiction", 2).is_ok());
    assert!(library.add_member("M001", "Alice", "alice@example.com").is_ok());
    assert!(library.add_member("M002", "Bob", "bob@example.com").is_ok());

    // Normal borrow
    assert!(library.borrow("B001", "M001").is_ok());
    assert_eq!(available(&library, "B001"), 2);

    // No copies left
    assert!(library.borrow("B002", "M001").is_ok());
    assert!(library.borrow("B002", "M002").is_ok());
    assert!(library.borrow("B002", "M001").is_err());

    // Loan limit
    assert!(library.add_book("B003", "Clean Code", "R. Martin", "Non-Fiction", 1).is_ok());
    assert!(library.add_book("B004", "Django Unleashed", "April", "Non-Fiction", 1).is_ok());
    assert!(library.borrow("B003", "M002").is_ok());
    assert!(library.borrow("B004", "M002").is_ok());
    assert!(library.add_book("B005", "Algorithms", "CLRS", "Non-Fiction", 1).is_ok());
    assert!(library.borrow("B005", "M002").is_err());

    // Return of a title not held
    assert!(library.return_book("B005", "M001").is_err());

    // Updates
    assert!(library
        .update_member("M001", MemberPatch::new().name("Alice Smith"))
        .is_ok());
    assert!(library
        .update_book("B001", BookPatch::new().title("Python Basics 2nd Edition"))
        .is_ok());

    // Member with loans cannot leave
    assert!(library.delete_member("M001").is_err());

    // Return everything, then leave
    assert!(library.return_book("B001", "M001").is_ok());
    let held: Vec<String> = library
        .roster()
        .get("M001")
        .unwrap()
        .borrowed
        .iter()
        .cloned()
        .collect();
    for isbn in held {
        library.return_book(&isbn, "M001").unwrap();
    }
    assert!(library.delete_member("M001").is_ok());

    // Title with no loans can go
    assert!(library.return_book("B003", "M002").is_ok());
    assert!(library.delete_book("B003").is_ok());

    assert!(library.audit().is_empty());
}

#[test]
fn search_reports_isbn_with_each_hit() {
    let mut library = Library::new();
    library.add_book("ISBN001", "Python Basics", "John Doe", "Non-Fiction", 5).unwrap();
    library.add_book("ISBN002", "Learn Java", "Jane Roe", "Non-Fiction", 3).unwrap();

    let hits = library.search_books("python", SearchField::Title);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].isbn, "ISBN001");
    assert!(library.search_books("", SearchField::Author).is_empty());
}

#[test]
fn ledger_follows_the_pair_state_machine() {
    let mut library = Library::new();
    library.add_book("B1", "T", "A", "Fiction", 1).unwrap();
    library.add_member("M1", "N", "e@x.com").unwrap();

    library.borrow("B1", "M1").unwrap();
    assert!(library.borrow("B1", "M1").is_err());
    library.return_book("B1", "M1").unwrap();
    assert!(library.return_book("B1", "M1").is_err());

    assert_eq!(
        library.ledger().path("B1", "M1"),
        vec![LoanState::NotBorrowed, LoanState::Borrowed, LoanState::NotBorrowed]
    );
}
