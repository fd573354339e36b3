use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{
    Author, AuthorId, Book, BookId, CatalogCounts, Librarian, LibrarianId, Library, LibraryId,
};

use super::migrations::MIGRATIONS;

/// A database connection with CRUD methods for catalog entities.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path and apply migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        log::debug!("Opening database at {}", path.display());
        Self::init(Connection::open(path)?)
    }

    /// Open an in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    /// Get a reference to the underlying connection (for advanced queries).
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Run `f` inside a transaction. Commits if `f` succeeds, rolls back otherwise.
    pub fn transaction<T>(&self, f: impl FnOnce(&Self) -> Result<T>) -> Result<T> {
        let tx = self.conn.unchecked_transaction()?;
        let value = f(self)?;
        tx.commit()?;
        Ok(value)
    }

    fn init(conn: Connection) -> Result<Self> {
        // Per-connection setting, so it is applied on every open.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Self { conn };
        db.apply_migrations()?;
        Ok(db)
    }

    fn apply_migrations(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        let mut stmt = self
            .conn
            .prepare("SELECT version FROM schema_migrations ORDER BY version")?;
        let applied: Vec<u32> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        for migration in MIGRATIONS {
            if !applied.contains(&migration.version) {
                log::info!(
                    "Applying migration {} ({})",
                    migration.version,
                    migration.name
                );
                self.conn.execute_batch(migration.sql)?;
                self.conn.execute(
                    "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
                    rusqlite::params![migration.version, migration.name],
                )?;
            }
        }

        Ok(())
    }

    /// Row counts for every catalog table.
    pub fn counts(&self) -> Result<CatalogCounts> {
        Ok(CatalogCounts {
            authors: self.count_rows("authors")?,
            books: self.count_rows("books")?,
            libraries: self.count_rows("libraries")?,
            librarians: self.count_rows("librarians")?,
        })
    }

    fn count_rows(&self, table: &'static str) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}

// Author CRUD
impl Database {
    /// Insert a new author.
    pub fn insert_author(&self, author: &Author) -> Result<()> {
        self.conn.execute(
            "INSERT INTO authors (id, name, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![
                author.id.to_string(),
                author.name,
                author.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Fetch an author by id.
    pub fn get_author(&self, id: &AuthorId) -> Result<Author> {
        self.conn
            .query_row(
                "SELECT id, name, created_at FROM authors WHERE id = ?1",
                [id.to_string()],
                row_to_author,
            )
            .optional()?
            .ok_or_else(|| Error::NotFound {
                entity: "author",
                id: id.to_string(),
            })
    }

    /// Look up the single author with exactly this name.
    ///
    /// Returns `Ok(None)` when no author matches and [`Error::Ambiguous`]
    /// when more than one does.
    pub fn get_author_by_name(&self, name: &str) -> Result<Option<Author>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, created_at FROM authors
             WHERE name = ?1
             ORDER BY rowid
             LIMIT 2",
        )?;
        let matches = stmt
            .query_map([name], row_to_author)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        single_match("author", name, matches)
    }
}

// Book CRUD
impl Database {
    /// Insert a new book. Its author must already exist.
    pub fn insert_book(&self, book: &Book) -> Result<()> {
        self.conn.execute(
            "INSERT INTO books (id, title, author_id, created_at) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                book.id.to_string(),
                book.title,
                book.author_id.to_string(),
                book.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// All books written by an author, in insertion order.
    pub fn books_by_author(&self, author_id: &AuthorId) -> Result<Vec<Book>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, author_id, created_at FROM books
             WHERE author_id = ?1
             ORDER BY rowid",
        )?;
        let books = stmt
            .query_map([author_id.to_string()], row_to_book)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(books)
    }
}

// Library CRUD
impl Database {
    /// Insert a new library.
    pub fn insert_library(&self, library: &Library) -> Result<()> {
        self.conn.execute(
            "INSERT INTO libraries (id, name, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![
                library.id.to_string(),
                library.name,
                library.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Look up the single library with exactly this name.
    ///
    /// Returns `Ok(None)` when no library matches and [`Error::Ambiguous`]
    /// when more than one does.
    pub fn get_library_by_name(&self, name: &str) -> Result<Option<Library>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, created_at FROM libraries
             WHERE name = ?1
             ORDER BY rowid
             LIMIT 2",
        )?;
        let matches = stmt
            .query_map([name], row_to_library)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        single_match("library", name, matches)
    }

    /// Associate books with a library. Pairs already present are left alone.
    pub fn add_books_to_library(&self, library: &Library, books: &[&Book]) -> Result<()> {
        let mut stmt = self.conn.prepare(
            "INSERT OR IGNORE INTO library_books (library_id, book_id) VALUES (?1, ?2)",
        )?;
        for book in books {
            stmt.execute([library.id.to_string(), book.id.to_string()])?;
        }
        Ok(())
    }

    /// All books held by a library, in the order they were added.
    pub fn books_in_library(&self, library_id: &LibraryId) -> Result<Vec<Book>> {
        let mut stmt = self.conn.prepare(
            "SELECT b.id, b.title, b.author_id, b.created_at
             FROM books b
             JOIN library_books lb ON lb.book_id = b.id
             WHERE lb.library_id = ?1
             ORDER BY lb.rowid",
        )?;
        let books = stmt
            .query_map([library_id.to_string()], row_to_book)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(books)
    }
}

// Librarian CRUD
impl Database {
    /// Insert a new librarian. Fails if the library already has one.
    pub fn insert_librarian(&self, librarian: &Librarian) -> Result<()> {
        self.conn.execute(
            "INSERT INTO librarians (id, name, library_id, created_at) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                librarian.id.to_string(),
                librarian.name,
                librarian.library_id.to_string(),
                librarian.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// The librarian assigned to a library, if any.
    pub fn librarian_for_library(&self, library_id: &LibraryId) -> Result<Option<Librarian>> {
        let librarian = self
            .conn
            .query_row(
                "SELECT id, name, library_id, created_at FROM librarians WHERE library_id = ?1",
                [library_id.to_string()],
                row_to_librarian,
            )
            .optional()?;
        Ok(librarian)
    }
}

fn single_match<T>(entity: &'static str, name: &str, mut matches: Vec<T>) -> Result<Option<T>> {
    if matches.len() > 1 {
        return Err(Error::Ambiguous {
            entity,
            name: name.to_string(),
        });
    }
    Ok(matches.pop())
}

fn row_to_author(row: &Row) -> rusqlite::Result<Author> {
    Ok(Author {
        id: AuthorId::from_uuid(uuid_column(row, 0)?),
        name: row.get(1)?,
        created_at: timestamp_column(row, 2)?,
    })
}

fn row_to_book(row: &Row) -> rusqlite::Result<Book> {
    Ok(Book {
        id: BookId::from_uuid(uuid_column(row, 0)?),
        title: row.get(1)?,
        author_id: AuthorId::from_uuid(uuid_column(row, 2)?),
        created_at: timestamp_column(row, 3)?,
    })
}

fn row_to_library(row: &Row) -> rusqlite::Result<Library> {
    Ok(Library {
        id: LibraryId::from_uuid(uuid_column(row, 0)?),
        name: row.get(1)?,
        created_at: timestamp_column(row, 2)?,
    })
}

fn row_to_librarian(row: &Row) -> rusqlite::Result<Librarian> {
    Ok(Librarian {
        id: LibrarianId::from_uuid(uuid_column(row, 0)?),
        name: row.get(1)?,
        library_id: LibraryId::from_uuid(uuid_column(row, 2)?),
        created_at: timestamp_column(row, 3)?,
    })
}

fn uuid_column(row: &Row, idx: usize) -> rusqlite::Result<Uuid> {
    let text: String = row.get(idx)?;
    Uuid::parse_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let text: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
