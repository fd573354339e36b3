/// A schema migration.
#[derive(Debug)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

const MIGRATION_001: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Authors (names are not unique; lookups detect duplicates)
CREATE TABLE IF NOT EXISTS authors (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_authors_name ON authors(name);

-- Books (many-to-one: every book has exactly one author)
CREATE TABLE IF NOT EXISTS books (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    author_id TEXT NOT NULL REFERENCES authors(id),
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_books_author_id ON books(author_id);

-- Libraries
CREATE TABLE IF NOT EXISTS libraries (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_libraries_name ON libraries(name);

-- Library holdings (many-to-many, association only)
CREATE TABLE IF NOT EXISTS library_books (
    library_id TEXT NOT NULL REFERENCES libraries(id),
    book_id TEXT NOT NULL REFERENCES books(id),
    PRIMARY KEY (library_id, book_id)
);

CREATE INDEX IF NOT EXISTS idx_library_books_book_id ON library_books(book_id);

-- Librarians (one-to-one with libraries)
CREATE TABLE IF NOT EXISTS librarians (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    library_id TEXT NOT NULL UNIQUE REFERENCES libraries(id),
    created_at TEXT NOT NULL
);
"#;

pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: MIGRATION_001,
}];
