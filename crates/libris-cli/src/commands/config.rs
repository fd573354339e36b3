use anyhow::{Context, Result};

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    let config_path = config::config_file_path();
    println!("Config file: {}", config_path.display());

    let exists = config_path.exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    print!(
        "{}",
        toml::to_string_pretty(config).context("Failed to render configuration")?
    );
    if config.database_path.is_none() {
        println!("# database_path unset: using an in-memory database");
    }

    println!("\nPriority: CLI args > ENV vars (LIBRIS_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure libris.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
