//! Command-line front end for the glossary.
//!
//! Parses arguments, resolves configuration, opens the store and runs one
//! command against it. All user-facing wording lives in [`output`].

mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigOverrides, GlossaryConfig};
use crate::connection::TableConnection;
use crate::glossary::{GlossaryError, GlossaryStore};
use crate::turso::DatabaseLocation;

pub use output::{closest_name, config_user_error, term_detail, term_lines, to_user_error};

/// Searchable glossary of technical terms
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file to use
    #[arg(long, value_name = "PATH", conflicts_with = "memory")]
    pub db: Option<PathBuf>,

    /// Use a throwaway in-memory database
    #[arg(long)]
    pub memory: bool,

    /// Settings file to read instead of the default one
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seconds to keep cached reads (0 disables the cache)
    #[arg(long, value_name = "SECS")]
    pub cache_ttl: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List every term
    List,
    /// Find terms whose name contains the query, ignoring case
    Search { query: String },
    /// Show the full definition of a term
    Show { name: String },
    /// Add a new term
    Add { name: String, definition: String },
    /// Delete one or more terms
    Delete {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        let database = if self.memory {
            Some(DatabaseLocation::Memory)
        } else {
            self.db.clone().map(DatabaseLocation::from)
        };
        ConfigOverrides {
            database,
            cache_ttl_secs: self.cache_ttl,
            settings_path: self.config.clone(),
        }
    }
}

/// Binary entry point: parse args, run one command, report the outcome.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match GlossaryConfig::resolve(&cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", config_user_error(&e));
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(async {
        let store = config.open_store().await.map_err(|e| to_user_error(&e))?;
        execute(&store, &cli.command, cli.json).await
    });

    match result {
        Ok(text) => {
            if !text.is_empty() {
                println!("{}", text);
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

/// Run one command against the store, returning stdout text or a user-facing error.
pub async fn execute<C: TableConnection>(
    store: &GlossaryStore<C>,
    command: &Command,
    json: bool,
) -> Result<String, String> {
    let user_error = |e: GlossaryError| to_user_error(&e);

    match command {
        Command::List => {
            let terms = store.list_all().await.map_err(user_error)?;
            if json {
                return to_json(&terms);
            }
            if terms.is_empty() {
                return Ok("The glossary is empty".to_string());
            }
            Ok(term_lines(&terms))
        }
        Command::Search { query } => {
            let terms = store.search(query).await.map_err(user_error)?;
            if json {
                return to_json(&terms);
            }
            if terms.is_empty() {
                return Ok(format!("No terms match '{}'", query));
            }
            Ok(term_lines(&terms))
        }
        Command::Show { name } => match store.find(name).await.map_err(user_error)? {
            Some(term) if json => to_json(&term),
            Some(term) => Ok(term_detail(&term)),
            None => {
                let terms = store.list_all().await.map_err(user_error)?;
                Err(match closest_name(name, &terms) {
                    Some(suggestion) => format!(
                        "Term '{}' not found. Did you mean '{}'?",
                        name, suggestion
                    ),
                    None => format!("Term '{}' not found", name),
                })
            }
        },
        Command::Add { name, definition } => {
            let term = store.insert(name, definition).await.map_err(user_error)?;
            crate::info!("Added glossary term '{}'", term.name);
            if json {
                return to_json(&term);
            }
            Ok(format!("Added '{}'", term.name))
        }
        Command::Delete { names } => {
            let summary = store.delete(names.as_slice()).await.map_err(user_error)?;
            crate::info!("Deleted {} glossary term(s)", summary.deleted.len());
            if json {
                return to_json(&summary);
            }
            Ok(format!("Deleted {} term(s)", summary.deleted.len()))
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to encode output: {}", e))
}

/// Install the fmt subscriber; `log` records are bridged through tracing-log.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("glossary_lib={}", level)));

    // Already installed when run twice in one process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
