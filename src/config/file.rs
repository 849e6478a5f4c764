//! Configuration file support for Folio
//!
//! This module provides TOML configuration file parsing and merging with CLI arguments.
//!
//! ## Priority Order
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values
//!
//! ## Example Configuration
//!
//! ```toml
//! # folio.toml
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! log_level = "info"
//! graphiql = true
//!
//! [store]
//! seed_file = "./seed.json"
//! enforce_author_refs = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::defaults::DEFAULT_CONFIG_FILE;
use crate::error::{FolioError, Result};

/// Root configuration structure for TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// HTTP endpoint configuration
    pub server: ServerSection,

    /// Record store configuration
    pub store: StoreSection,
}

/// `[server]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    /// Serve GraphiQL on GET requests
    pub graphiql: Option<bool>,
    pub shutdown_timeout_secs: Option<u64>,
}

/// `[store]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub seed_file: Option<PathBuf>,
    /// Load seed data at startup (`false` starts empty)
    pub seed: Option<bool>,
    pub enforce_author_refs: Option<bool>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::parse(&contents).map_err(|e| {
            FolioError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Try to load `./folio.toml`.
    ///
    /// A missing file is not an error. A file that exists but cannot be read
    /// or parsed is.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_if_exists(DEFAULT_CONFIG_FILE)
    }

    /// Load `path` if it exists
    pub fn load_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Generate an example configuration file
    pub fn generate_example() -> String {
        r#"# Folio Configuration File
# Copy to folio.toml and customize as needed
#
# Configuration priority (highest to lowest):
# 1. Command-line arguments
# 2. Environment variables
# 3. This configuration file
# 4. Default values

[server]
# Host address to bind the GraphQL endpoint to
host = "0.0.0.0"

# HTTP port (the PORT environment variable overrides this)
port = 8080

# Log level (trace, debug, info, warn, error)
log_level = "info"

# Serve the GraphiQL explorer on GET requests
graphiql = true

# Graceful shutdown timeout in seconds
shutdown_timeout_secs = 10

[store]
# JSON file with initial authors and articles (built-in sample data if unset)
# seed_file = "./seed.json"

# Set to false to start with empty collections
seed = true

# Reject addArticle calls whose authorId matches no author
enforce_author_refs = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_generated_example_parses() {
        let config = ConfigFile::parse(&ConfigFile::generate_example()).unwrap();
        assert_eq!(config.server.port, Some(8080));
        assert_eq!(config.server.graphiql, Some(true));
        assert_eq!(config.store.seed, Some(true));
        assert_eq!(config.store.seed_file, None);
    }

    #[test]
    fn test_partial_file() {
        let config = ConfigFile::parse("[store]\nenforce_author_refs = true\n").unwrap();
        assert_eq!(config.store.enforce_author_refs, Some(true));
        assert_eq!(config.server, ServerSection::default());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 4000\nlog_level = \"debug\"").unwrap();

        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.server.port, Some(4000));
        assert_eq!(config.server.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_load_if_exists_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigFile::load_if_exists(dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, None);
    }

    #[test]
    fn test_load_if_exists_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[server").unwrap();

        let err = ConfigFile::load_if_exists(&path).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_if_exists_present_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[server]\nport = 4100\n").unwrap();

        let config = ConfigFile::load_if_exists(&path).unwrap().unwrap();
        assert_eq!(config.server.port, Some(4100));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = ConfigFile::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
