use std::io::Write;

use anyhow::{Context, Result};
use libris_core::seed::create_sample_data;
use libris_core::Database;

/// Insert the sample fixture and report progress.
pub fn run_seed(db: &Database, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Creating sample data...")?;
    create_sample_data(db).context("Failed to create sample data")?;
    writeln!(out, "Sample data created successfully!")?;
    writeln!(out)?;
    Ok(())
}
