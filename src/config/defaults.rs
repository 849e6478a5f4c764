//! Default constants for Folio configuration
//!
//! These constants define the default values used throughout the configuration
//! system when no explicit value is provided.

/// Default bind host for the HTTP/GraphQL endpoint
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port, used when neither `--port` nor `PORT` is set
pub const DEFAULT_PORT: u16 = 8080;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default graceful shutdown timeout in seconds
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";
