use std::io::Write;

use anyhow::Result;
use libris_core::Database;

use super::query::{show_books_by_author, show_books_in_library, show_librarian};

const BANNER_WIDTH: usize = 50;

const SAMPLE_AUTHOR: &str = "J.K. Rowling";
const SAMPLE_LIBRARY: &str = "Central Library";

/// Seed the store once, then run the three canned queries in order.
pub fn run_demo(db: &Database, out: &mut impl Write) -> Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{}", banner)?;
    writeln!(out, "DEMONSTRATING LIBRARY RELATIONSHIP QUERIES")?;
    writeln!(out, "{}", banner)?;

    super::run_seed(db, out)?;

    writeln!(out, "1. Query all books by a specific author:")?;
    show_books_by_author(db, SAMPLE_AUTHOR, out)?;
    writeln!(out)?;

    writeln!(out, "2. List all books in a library:")?;
    show_books_in_library(db, SAMPLE_LIBRARY, out)?;
    writeln!(out)?;

    writeln!(out, "3. Retrieve the librarian for a library:")?;
    show_librarian(db, SAMPLE_LIBRARY, out)?;
    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libris_core::seed::create_sample_data;

    const EXPECTED: &str = "\
==================================================
DEMONSTRATING LIBRARY RELATIONSHIP QUERIES
==================================================
Creating sample data...
Sample data created successfully!

1. Query all books by a specific author:
Books by J.K. Rowling:
- Harry Potter and the Philosopher's Stone
- Harry Potter and the Chamber of Secrets

2. List all books in a library:
Books in Central Library:
- Harry Potter and the Philosopher's Stone by J.K. Rowling
- Harry Potter and the Chamber of Secrets by J.K. Rowling

3. Retrieve the librarian for a library:
Librarian for Central Library: Sarah Johnson

";

    #[test]
    fn test_demo_output() {
        let db = Database::open_in_memory().unwrap();
        let mut out = Vec::new();
        run_demo(&db, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
    }

    #[test]
    fn test_demo_seeds_exactly_once() {
        let db = Database::open_in_memory().unwrap();
        run_demo(&db, &mut Vec::new()).unwrap();
        let counts = db.counts().unwrap();
        assert_eq!(counts.authors, 2);
        assert_eq!(counts.books, 3);
        assert_eq!(counts.libraries, 2);
        assert_eq!(counts.librarians, 2);
    }

    #[test]
    fn test_demo_on_already_seeded_store_fails() {
        let db = Database::open_in_memory().unwrap();
        create_sample_data(&db).unwrap();
        assert!(run_demo(&db, &mut Vec::new()).is_err());
    }
}
