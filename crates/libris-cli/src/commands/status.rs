use std::io::Write;

use anyhow::Result;
use libris_core::Database;

use crate::config::Config;

/// Print row counts for every catalog table.
pub fn show_status(db: &Database, config: &Config, json: bool, out: &mut impl Write) -> Result<()> {
    let counts = db.counts()?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&counts)?)?;
        return Ok(());
    }

    writeln!(out, "Libris Status")?;
    writeln!(out, "=============\n")?;
    match &config.database_path {
        Some(path) => writeln!(out, "  Database: {}", path.display())?,
        None => writeln!(out, "  Database: <in-memory>")?,
    }
    writeln!(out, "  Authors: {}", counts.authors)?;
    writeln!(out, "  Books: {}", counts.books)?;
    writeln!(out, "  Libraries: {}", counts.libraries)?;
    writeln!(out, "  Librarians: {}", counts.librarians)?;

    if counts.is_empty() {
        writeln!(out, "\n  Run `libris seed` to load the sample catalog")?;
    }

    Ok(())
}
