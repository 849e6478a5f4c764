//! Command-line arguments for the Folio server
//!
//! This module defines the CLI arguments structure using clap.

use clap::Parser;
use std::path::PathBuf;

use super::defaults::*;

/// Command-line arguments for the Folio server
#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A small GraphQL service over in-memory authors and articles")]
pub struct ServerArgs {
    /// Path to configuration file (TOML format).
    /// If not specified, looks for folio.toml in the current directory
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Generate example configuration file and exit
    #[arg(long)]
    pub generate_config: bool,

    /// Host address to bind the HTTP endpoint to
    #[arg(long, env = "FOLIO_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port for the HTTP endpoint
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error) or a full filter directive
    #[arg(long, env = "FOLIO_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// JSON file with the initial authors and articles.
    /// Built-in sample data is used when omitted
    #[arg(long, env = "FOLIO_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Start with empty collections instead of seed data
    #[arg(long, env = "FOLIO_NO_SEED")]
    pub no_seed: bool,

    /// Do not serve the GraphiQL explorer on GET requests
    #[arg(long, env = "FOLIO_DISABLE_GRAPHIQL")]
    pub disable_graphiql: bool,

    /// Reject addArticle calls whose authorId matches no author
    #[arg(long, env = "FOLIO_ENFORCE_AUTHOR_REFS")]
    pub enforce_author_refs: bool,

    /// Seconds to wait for in-flight requests on shutdown
    #[arg(long, env = "FOLIO_SHUTDOWN_TIMEOUT_SECS", default_value_t = DEFAULT_SHUTDOWN_TIMEOUT_SECS)]
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            config: None,
            generate_config: false,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed_file: None,
            no_seed: false,
            disable_graphiql: false,
            enforce_author_refs: false,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        }
    }
}
