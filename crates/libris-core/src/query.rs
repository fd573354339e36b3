//! Canned relationship lookups over the catalog.
//!
//! Each query resolves one entity by name and then follows a relationship
//! from it. A name that matches nothing is not an error: it comes back as
//! [`Lookup::Missing`], carrying the message to show the user. Duplicate
//! names and storage failures are returned as `Err` and left to the caller.

use std::fmt;

use crate::error::Result;
use crate::model::{Book, Librarian, ShelvedBook};
use crate::schema::Database;

/// Level at which a miss is logged. Callers report misses themselves, so
/// this stays below the CLI's default `warn` filter.
pub const MISS_LOG_LEVEL: log::Level = log::Level::Debug;

/// The outcome of a lookup that may legitimately find nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Missing(Missing),
}

/// Which part of a lookup came up empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    /// No author has this name.
    Author { name: String },
    /// No library has this name.
    Library { name: String },
    /// The library exists but has no librarian assigned.
    Librarian { library: String },
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Author { name } => write!(f, "Author '{}' not found.", name),
            Self::Library { name } => write!(f, "Library '{}' not found.", name),
            Self::Librarian { library } => write!(f, "No librarian found for {}.", library),
        }
    }
}

impl<T> Lookup<T> {
    fn missing(missing: Missing) -> Self {
        log::log!(MISS_LOG_LEVEL, "{}", missing);
        Self::Missing(missing)
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The found value, dropping the reason for a miss.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Missing(_) => None,
        }
    }
}

impl<T: Default> Lookup<T> {
    /// The found value, or an empty one on a miss.
    pub fn unwrap_or_default(self) -> T {
        self.found().unwrap_or_default()
    }
}

/// All books by the author with exactly this name.
pub fn query_books_by_author(db: &Database, author_name: &str) -> Result<Lookup<Vec<Book>>> {
    log::debug!("Querying books by author '{}'", author_name);
    let Some(author) = db.get_author_by_name(author_name)? else {
        return Ok(Lookup::missing(Missing::Author {
            name: author_name.to_string(),
        }));
    };
    Ok(Lookup::Found(db.books_by_author(&author.id)?))
}

/// All books held by the named library, each paired with its author.
pub fn list_books_in_library(
    db: &Database,
    library_name: &str,
) -> Result<Lookup<Vec<ShelvedBook>>> {
    log::debug!("Listing books in library '{}'", library_name);
    let Some(library) = db.get_library_by_name(library_name)? else {
        return Ok(Lookup::missing(Missing::Library {
            name: library_name.to_string(),
        }));
    };

    let shelved = db
        .books_in_library(&library.id)?
        .into_iter()
        .map(|book| {
            let author = db.get_author(&book.author_id)?;
            Ok(ShelvedBook { book, author })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Lookup::Found(shelved))
}

/// The librarian assigned to the named library.
pub fn get_librarian_for_library(db: &Database, library_name: &str) -> Result<Lookup<Librarian>> {
    log::debug!("Fetching librarian for library '{}'", library_name);
    let Some(library) = db.get_library_by_name(library_name)? else {
        return Ok(Lookup::missing(Missing::Library {
            name: library_name.to_string(),
        }));
    };

    Ok(match db.librarian_for_library(&library.id)? {
        Some(librarian) => Lookup::Found(librarian),
        None => Lookup::missing(Missing::Librarian {
            library: library.name,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Library;
    use crate::seed::create_sample_data;
    use crate::Error;

    fn seeded() -> Database {
        let db = Database::open_in_memory().unwrap();
        create_sample_data(&db).unwrap();
        db
    }

    #[test]
    fn test_books_by_known_author() {
        let db = seeded();
        let books = query_books_by_author(&db, "J.K. Rowling")
            .unwrap()
            .found()
            .unwrap();
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Harry Potter and the Philosopher's Stone",
                "Harry Potter and the Chamber of Secrets",
            ]
        );
    }

    #[test]
    fn test_books_by_unknown_author() {
        let db = seeded();
        let lookup = query_books_by_author(&db, "Unknown Person").unwrap();
        assert_eq!(
            lookup,
            Lookup::Missing(Missing::Author {
                name: "Unknown Person".to_string()
            })
        );
        if let Lookup::Missing(missing) = &lookup {
            assert_eq!(missing.to_string(), "Author 'Unknown Person' not found.");
        }
        assert!(lookup.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_books_in_central_library_carry_authors() {
        let db = seeded();
        let shelved = list_books_in_library(&db, "Central Library")
            .unwrap()
            .found()
            .unwrap();
        assert_eq!(shelved.len(), 2);
        assert!(shelved.iter().all(|s| s.author.name == "J.K. Rowling"));
        assert!(shelved.iter().all(|s| s.book.author_id == s.author.id));
        assert_eq!(
            shelved[0].to_string(),
            "Harry Potter and the Philosopher's Stone by J.K. Rowling"
        );
    }

    #[test]
    fn test_books_in_city_library() {
        let db = seeded();
        let shelved = list_books_in_library(&db, "City Library")
            .unwrap()
            .unwrap_or_default();
        assert_eq!(shelved.len(), 1);
        assert_eq!(shelved[0].to_string(), "A Game of Thrones by George R.R. Martin");
    }

    #[test]
    fn test_books_in_unknown_library() {
        let db = seeded();
        let lookup = list_books_in_library(&db, "Nonexistent Library").unwrap();
        assert!(!lookup.is_found());
        assert!(lookup.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_librarian_for_city_library() {
        let db = seeded();
        let librarian = get_librarian_for_library(&db, "City Library")
            .unwrap()
            .found()
            .unwrap();
        assert_eq!(librarian.name, "Michael Brown");
    }

    #[test]
    fn test_librarian_for_unknown_library() {
        let db = seeded();
        let lookup = get_librarian_for_library(&db, "Nonexistent Library").unwrap();
        match lookup {
            Lookup::Missing(missing) => {
                assert_eq!(missing.to_string(), "Library 'Nonexistent Library' not found.");
            }
            Lookup::Found(librarian) => panic!("unexpected librarian {}", librarian.name),
        }
    }

    #[test]
    fn test_library_without_librarian() {
        let db = seeded();
        db.insert_library(&Library::new("Annex")).unwrap();

        let lookup = get_librarian_for_library(&db, "Annex").unwrap();
        let expected = Missing::Librarian {
            library: "Annex".to_string(),
        };
        assert_eq!(expected.to_string(), "No librarian found for Annex.");
        assert_eq!(lookup, Lookup::Missing(expected));
    }

    #[test]
    fn test_duplicate_author_surfaces_as_error() {
        let db = seeded();
        create_sample_data(&db).unwrap();

        let err = query_books_by_author(&db, "J.K. Rowling").unwrap_err();
        assert!(matches!(err, Error::Ambiguous { entity: "author", .. }));
    }
}
