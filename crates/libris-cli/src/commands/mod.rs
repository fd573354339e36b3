pub mod config;
pub mod demo;
pub mod query;
pub mod seed;
pub mod status;

pub use demo::run_demo;
pub use query::{show_books_by_author, show_books_in_library, show_librarian};
pub use seed::run_seed;
pub use status::show_status;

use anyhow::{Context, Result};
use libris_core::Database;

use crate::config::Config;

/// Open the configured store, or a fresh in-memory one when no path is set.
pub fn open_database(config: &Config) -> Result<Database> {
    match &config.database_path {
        Some(path) => Database::open(path)
            .with_context(|| format!("Failed to open database at {}", path.display())),
        None => {
            log::info!("No database_path configured; using an in-memory database");
            Database::open_in_memory().context("Failed to open in-memory database")
        }
    }
}
