use std::io::Write;

use anyhow::Result;
use libris_core::query::{get_librarian_for_library, list_books_in_library, query_books_by_author};
use libris_core::{Database, Lookup};

/// Print every book by the named author as a bullet list.
pub fn show_books_by_author(db: &Database, author_name: &str, out: &mut impl Write) -> Result<()> {
    match query_books_by_author(db, author_name)? {
        Lookup::Found(books) => {
            writeln!(out, "Books by {}:", author_name)?;
            for book in &books {
                writeln!(out, "- {}", book)?;
            }
        }
        Lookup::Missing(missing) => writeln!(out, "{}", missing)?,
    }
    Ok(())
}

/// Print every book held by the named library, with its author.
pub fn show_books_in_library(
    db: &Database,
    library_name: &str,
    out: &mut impl Write,
) -> Result<()> {
    match list_books_in_library(db, library_name)? {
        Lookup::Found(shelved) => {
            writeln!(out, "Books in {}:", library_name)?;
            for entry in &shelved {
                writeln!(out, "- {}", entry)?;
            }
        }
        Lookup::Missing(missing) => writeln!(out, "{}", missing)?,
    }
    Ok(())
}

/// Print the librarian assigned to the named library.
pub fn show_librarian(db: &Database, library_name: &str, out: &mut impl Write) -> Result<()> {
    match get_librarian_for_library(db, library_name)? {
        Lookup::Found(librarian) => {
            writeln!(out, "Librarian for {}: {}", library_name, librarian)?;
        }
        Lookup::Missing(missing) => writeln!(out, "{}", missing)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libris_core::seed::create_sample_data;

    fn render(f: impl FnOnce(&Database, &mut Vec<u8>) -> Result<()>) -> String {
        let db = Database::open_in_memory().unwrap();
        create_sample_data(&db).unwrap();
        let mut out = Vec::new();
        f(&db, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_books_by_unknown_author_prints_message() {
        let text = render(|db, out| show_books_by_author(db, "Unknown Person", out));
        assert_eq!(text, "Author 'Unknown Person' not found.\n");
    }

    #[test]
    fn test_city_library_books() {
        let text = render(|db, out| show_books_in_library(db, "City Library", out));
        assert_eq!(
            text,
            "Books in City Library:\n- A Game of Thrones by George R.R. Martin\n"
        );
    }

    #[test]
    fn test_librarian_for_city_library() {
        let text = render(|db, out| show_librarian(db, "City Library", out));
        assert_eq!(text, "Librarian for City Library: Michael Brown\n");
    }

    #[test]
    fn test_librarian_for_missing_library() {
        let text = render(|db, out| show_librarian(db, "Nonexistent Library", out));
        assert_eq!(text, "Library 'Nonexistent Library' not found.\n");
    }
}
