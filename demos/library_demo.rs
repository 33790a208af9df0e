//! Library Demo
//!
//! Walks a small library through its whole lifecycle and prints the state
//! after each stage.
//!
//! Key concepts:
//! - Adding titles and members
//! - Searching the catalog by a field given as text
//! - Borrowing until a title runs out
//! - Updates, and deletes refused while copies are out
//!
//! Run with: cargo run --example library_demo
//! Set RUST_LOG=libris=debug to see every applied and rejected operation.

use libris::{BookPatch, Genre, Library, MemberPatch, SearchField};
use tracing_subscriber::EnvFilter;

fn print_state(library: &Library, note: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "=".repeat(60));
    println!("STATE: {note}");
    println!("{}", library.snapshot().to_json()?);
    println!("{}\n", "=".repeat(60));
    Ok(())
}

fn report<E: std::fmt::Display>(label: &str, result: Result<(), E>) {
    match result {
        Ok(()) => println!("{label}: ok"),
        Err(e) => println!("{label}: refused ({e})"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("libris=info")),
        )
        .init();

    let mut library = Library::new();
    let genres: Vec<&str> = Genre::ALL.iter().map(|g| g.name()).collect();
    println!("=== Library Demo ===");
    println!("Valid genres: {genres:?}\n");
    print_state(&library, "Initial empty state")?;

    library.add_book("ISBN001", "Python Basics", "John Doe", "Non-Fiction", 5)?;
    library.add_book("ISBN002", "Learn Java", "Jane Roe", "Non-Fiction", 3)?;
    library.add_book("ISBN003", "Space Odyssey", "Arthur C", "Sci-Fi", 2)?;
    library.add_book("ISBN004", "Love in Time", "Romance Author", "Romance", 4)?;
    library.add_book("ISBN005", "Mystery Manor", "Detective X", "Mystery", 2)?;
    print_state(&library, "After adding 5 books")?;

    library.add_member("MM001", "Alice Smith", "alice.smith@example.com")?;
    library.add_member("MM002", "Bob Brown", "bob.brown@example.com")?;
    library.add_member("MM003", "Clara Oswald", "clara.o@example.com")?;
    print_state(&library, "After adding 3 members")?;

    for (query, field) in [("python", "title"), ("roe", "author"), ("java", "publisher")] {
        let field: SearchField = match field.parse() {
            Ok(field) => field,
            Err(e) => {
                println!("Search for '{query}' skipped: {e}\n");
                continue;
            }
        };
        println!("Search for '{query}' by {field}:");
        for book in library.search_books(query, field) {
            println!("  {} - {} by {}", book.isbn, book.title, book.author);
        }
        println!();
    }

    report("Borrow ISBN001 for MM001", library.borrow("ISBN001", "MM001"));
    report("Borrow ISBN001 for MM002", library.borrow("ISBN001", "MM002"));
    report("Borrow ISBN003 for MM001", library.borrow("ISBN003", "MM001"));
    print_state(&library, "After some borrows")?;

    report("Borrow ISBN003 for MM002", library.borrow("ISBN003", "MM002"));
    report(
        "Borrow ISBN003 for MM003 (none left)",
        library.borrow("ISBN003", "MM003"),
    );
    print_state(&library, "After attempts on ISBN003")?;

    report("MM001 returns ISBN001", library.return_book("ISBN001", "MM001"));
    print_state(&library, "After return")?;

    report(
        "Retitle ISBN002 as 'Java: From Zero'",
        library.update_book("ISBN002", BookPatch::new().title("Java: From Zero")),
    );
    report(
        "Rename MM003 to 'Clara O'",
        library.update_member("MM003", MemberPatch::new().name("Clara O")),
    );
    print_state(&library, "After updates")?;

    report(
        "Delete ISBN001 (still on loan)",
        library.delete_book("ISBN001").map(|_| ()),
    );

    let holders: Vec<String> = library
        .holders("ISBN001")
        .into_iter()
        .map(|m| m.member_id.clone())
        .collect();
    for member_id in holders {
        report(
            &format!("{member_id} returns ISBN001"),
            library.return_book("ISBN001", &member_id),
        );
    }
    report("Delete ISBN001", library.delete_book("ISBN001").map(|_| ()));
    print_state(&library, "Final state")?;

    let problems = library.audit();
    if problems.is_empty() {
        tracing::info!("audit clean");
    } else {
        for problem in problems {
            tracing::warn!(%problem, "audit failed");
        }
    }

    Ok(())
}
