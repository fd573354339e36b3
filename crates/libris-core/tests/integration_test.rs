//! Integration tests for the seed → query flow against a file-backed store.

use libris_core::model::CatalogCounts;
use libris_core::query::{get_librarian_for_library, list_books_in_library, query_books_by_author};
use libris_core::seed::create_sample_data;
use libris_core::{Database, Error, Lookup, Missing};
use tempfile::TempDir;

/// Test database initialization and schema creation
#[test]
fn test_database_schema_creation() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("libris.db");

    let db = Database::open(&db_path).expect("Failed to open database");

    assert!(db_path.exists(), "Database file should be created");
    assert_eq!(db.counts().unwrap(), CatalogCounts::default());
}

/// Seeded data survives closing and reopening the store
#[test]
fn test_seed_persists_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("libris.db");

    {
        let db = Database::open(&db_path).unwrap();
        create_sample_data(&db).unwrap();
    }

    let db = Database::open(&db_path).unwrap();
    let counts = db.counts().unwrap();
    assert_eq!(counts.authors, 2);
    assert_eq!(counts.books, 3);
    assert_eq!(counts.libraries, 2);
    assert_eq!(counts.librarians, 2);

    let count: i64 = db
        .conn()
        .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(count, 1, "Reopening must not reapply migrations");
}

/// All three demonstration queries against a freshly seeded store
#[test]
fn test_demonstration_queries() {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(temp_dir.path().join("libris.db")).unwrap();
    create_sample_data(&db).unwrap();

    let rowling = query_books_by_author(&db, "J.K. Rowling")
        .unwrap()
        .unwrap_or_default();
    assert_eq!(rowling.len(), 2);

    let unknown = query_books_by_author(&db, "Unknown Person").unwrap();
    assert!(matches!(unknown, Lookup::Missing(Missing::Author { .. })));

    let central = list_books_in_library(&db, "Central Library")
        .unwrap()
        .unwrap_or_default();
    let lines: Vec<String> = central.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "Harry Potter and the Philosopher's Stone by J.K. Rowling",
            "Harry Potter and the Chamber of Secrets by J.K. Rowling",
        ]
    );

    let librarian = get_librarian_for_library(&db, "City Library")
        .unwrap()
        .found()
        .map(|l| l.name);
    assert_eq!(librarian.as_deref(), Some("Michael Brown"));

    let nowhere = get_librarian_for_library(&db, "Nonexistent Library").unwrap();
    assert!(nowhere.found().is_none());
}

/// A second seed into the same persistent store makes names ambiguous
#[test]
fn test_reseeding_persistent_store_is_ambiguous() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("libris.db");

    create_sample_data(&Database::open(&db_path).unwrap()).unwrap();
    let db = Database::open(&db_path).unwrap();
    create_sample_data(&db).unwrap();

    let err = list_books_in_library(&db, "Central Library").unwrap_err();
    assert!(matches!(err, Error::Ambiguous { entity: "library", .. }));
}
