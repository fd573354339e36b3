//! Sample catalog fixture.
//!
//! Not idempotent: every call inserts a fresh copy of the fixture, and once
//! a name appears twice the name lookups report it as ambiguous.

use crate::error::Result;
use crate::model::{Author, Book, Librarian, Library};
use crate::schema::Database;

/// Insert the sample fixture: 2 authors, 3 books, 2 libraries, 2 librarians.
pub fn create_sample_data(db: &Database) -> Result<()> {
    log::info!("Creating sample data");

    db.transaction(|db| {
        let rowling = Author::new("J.K. Rowling");
        let martin = Author::new("George R.R. Martin");
        db.insert_author(&rowling)?;
        db.insert_author(&martin)?;

        let stone = Book::new("Harry Potter and the Philosopher's Stone", &rowling);
        let chamber = Book::new("Harry Potter and the Chamber of Secrets", &rowling);
        let thrones = Book::new("A Game of Thrones", &martin);
        for book in [&stone, &chamber, &thrones] {
            db.insert_book(book)?;
        }

        let central = Library::new("Central Library");
        let city = Library::new("City Library");
        db.insert_library(&central)?;
        db.insert_library(&city)?;

        db.add_books_to_library(&central, &[&stone, &chamber])?;
        db.add_books_to_library(&city, &[&thrones])?;

        db.insert_librarian(&Librarian::new("Sarah Johnson", &central))?;
        db.insert_librarian(&Librarian::new("Michael Brown", &city))?;

        Ok(())
    })?;

    log::info!("Sample data created");
    Ok(())
}
