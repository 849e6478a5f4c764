//! Configuration module for Folio
//!
//! - `defaults` - Default constants and values
//! - `args` - CLI argument definitions
//! - `file` - TOML configuration file
//! - `merge` - Config file / CLI precedence

mod args;
mod defaults;
pub mod file;
mod merge;

pub use args::ServerArgs;
pub use defaults::*;
pub use file::ConfigFile;
pub use merge::merge_config_with_args;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::error::{FolioError, Result};
use crate::store::{SeedData, StoreOptions};

/// Where the store's initial records come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// Built-in sample data
    Builtin,
    /// JSON seed file
    File(PathBuf),
    /// Start with empty collections
    Empty,
}

impl SeedSource {
    /// Materialize the seed data
    pub fn load(&self) -> Result<SeedData> {
        match self {
            SeedSource::Builtin => Ok(SeedData::builtin()),
            SeedSource::File(path) => SeedData::load(path),
            SeedSource::Empty => Ok(SeedData::empty()),
        }
    }
}

/// Complete server configuration for Folio.
///
/// Built from [`ServerArgs`] after the optional config file has been merged in.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the GraphQL endpoint listens on
    pub http_addr: SocketAddr,

    /// Log level or filter directive
    pub log_level: String,

    /// Initial record source
    pub seed: SeedSource,

    /// Serve GraphiQL on GET requests
    pub graphiql: bool,

    /// Record store behavior
    pub store: StoreOptions,

    /// How long to wait for in-flight requests on shutdown
    pub shutdown_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::new(IpAddr::from([0, 0, 0, 0]), DEFAULT_PORT),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed: SeedSource::Builtin,
            graphiql: true,
            store: StoreOptions::default(),
            shutdown_timeout: Duration::from_secs(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Create configuration from CLI arguments
    pub fn from_args(args: ServerArgs) -> Result<Self> {
        let host: IpAddr = args.host.parse().map_err(|e| {
            FolioError::Config(format!("Invalid host '{}': {}", args.host, e))
        })?;

        let seed = if args.no_seed {
            SeedSource::Empty
        } else if let Some(path) = args.seed_file {
            SeedSource::File(path)
        } else {
            SeedSource::Builtin
        };

        Ok(Self {
            http_addr: SocketAddr::new(host, args.port),
            log_level: args.log_level,
            seed,
            graphiql: !args.disable_graphiql,
            store: StoreOptions {
                enforce_author_refs: args.enforce_author_refs,
            },
            shutdown_timeout: Duration::from_secs(args.shutdown_timeout_secs),
        })
    }

    /// Validate settings that parse but cannot work
    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            return Err(FolioError::Config("log level must not be empty".into()));
        }
        EnvFilter::try_new(&self.log_level).map_err(|e| {
            FolioError::Config(format!("Invalid log level '{}': {}", self.log_level, e))
        })?;

        if self.shutdown_timeout.is_zero() {
            return Err(FolioError::Config(
                "shutdown timeout must be greater than zero".into(),
            ));
        }

        if let SeedSource::File(path) = &self.seed {
            if !path.exists() {
                return Err(FolioError::Config(format!(
                    "Seed file {:?} does not exist",
                    path
                )));
            }
        }

        Ok(())
    }
}
