use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for libris.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (LIBRIS_* prefix)
/// 3. Config file (~/.config/libris/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database.
    ///
    /// Can be set via:
    /// - CLI: --db /path/to/db
    /// - ENV: LIBRIS_DATABASE_PATH
    /// - Config: database_path = "/path/to/db"
    /// - Default: unset, which means a fresh in-memory database per run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/libris/config.toml
    /// Reads environment variables with LIBRIS_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("libris");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, overriding the database path (the --db flag).
    pub fn load_with_db_path(db_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.database_path = Some(db_path);
        Ok(config)
    }
}

fn default_log_level() -> String {
    String::from("warn")
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/libris/config.toml
/// - macOS: ~/Library/Application Support/libris/config.toml
/// - Windows: %APPDATA%\libris\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("libris")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Libris Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (LIBRIS_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the SQLite database
#
# When unset, every run works against a fresh in-memory database.
# The sample loader is not idempotent: seeding the same file twice
# duplicates every row and makes the name lookups ambiguous.
#
# Can also be set via:
# - CLI: libris --db /custom/path.db seed
# - Environment: LIBRIS_DATABASE_PATH=/custom/path.db
#database_path = "/path/to/libris.db"

# Log filter (error, warn, info, debug, trace). RUST_LOG takes precedence.
log_level = "warn"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
