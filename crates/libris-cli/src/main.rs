use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

mod commands;
mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "libris", version, about)]
struct Cli {
    /// Command to run (default: demo)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the database (default: a fresh in-memory database)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Seed the sample catalog and run the canned queries
    ///
    /// Loads the sample fixture (2 authors, 3 books, 2 libraries,
    /// 2 librarians) and then runs, in order:
    ///
    /// 1. all books by "J.K. Rowling"
    /// 2. all books in "Central Library", with their authors
    /// 3. the librarian for "Central Library"
    ///
    /// This is what runs when no subcommand is given. The loader is not
    /// idempotent: running the demo twice against the same --db file
    /// duplicates the fixture and the name lookups then fail as ambiguous.
    Demo,
    /// Load the sample fixture only
    Seed,
    /// List the books written by an author
    Author {
        /// Exact, case-sensitive author name
        name: String,
    },
    /// List the books held by a library
    Library {
        /// Exact, case-sensitive library name
        name: String,
    },
    /// Show the librarian assigned to a library
    Librarian {
        /// Exact, case-sensitive library name
        library: String,
    },
    /// Show catalog row counts
    Status {
        /// Print the counts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Create the config file with defaults
    Init,
    /// Print an example config file
    Example,
}

fn init_logging(config: &Config) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.db {
        Some(db_path) => Config::load_with_db_path(db_path)?,
        None => Config::load()?,
    };
    init_logging(&config);

    let mut out = io::stdout().lock();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let db = commands::open_database(&config)?;
            commands::run_demo(&db, &mut out)?;
        }
        Commands::Seed => {
            let db = commands::open_database(&config)?;
            commands::run_seed(&db, &mut out)?;
        }
        Commands::Author { name } => {
            let db = commands::open_database(&config)?;
            commands::show_books_by_author(&db, &name, &mut out)?;
        }
        Commands::Library { name } => {
            let db = commands::open_database(&config)?;
            commands::show_books_in_library(&db, &name, &mut out)?;
        }
        Commands::Librarian { library } => {
            let db = commands::open_database(&config)?;
            commands::show_librarian(&db, &library, &mut out)?;
        }
        Commands::Status { json } => {
            let db = commands::open_database(&config)?;
            commands::show_status(&db, &config, json, &mut out)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Init => commands::config::init_config()?,
            ConfigAction::Example => commands::config::show_example()?,
        },
    }

    Ok(())
}
