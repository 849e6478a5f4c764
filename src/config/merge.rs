//! Configuration merging utilities
//!
//! This module provides functions to merge configuration from files
//! with command-line arguments, where CLI arguments take precedence.

use super::args::ServerArgs;
use super::file::ConfigFile;
use super::*;

/// Merge configuration file values with CLI arguments.
/// CLI arguments take precedence over config file values.
/// Only applies config file values where CLI uses defaults.
pub fn merge_config_with_args(mut args: ServerArgs, config: &ConfigFile) -> ServerArgs {
    // Helper macro to apply config value if CLI is at default
    macro_rules! apply_if_default {
        ($field:ident, $config_val:expr, $default:expr) => {
            if let Some(val) = $config_val {
                if args.$field == $default {
                    args.$field = val;
                }
            }
        };
    }

    macro_rules! apply_if_default_string {
        ($field:ident, $config_val:expr, $default:expr) => {
            if let Some(ref val) = $config_val {
                if args.$field == $default {
                    args.$field = val.clone();
                }
            }
        };
    }

    // Server section
    apply_if_default_string!(host, config.server.host, DEFAULT_HOST);
    apply_if_default!(port, config.server.port, DEFAULT_PORT);
    apply_if_default_string!(log_level, config.server.log_level, DEFAULT_LOG_LEVEL);
    apply_if_default!(
        shutdown_timeout_secs,
        config.server.shutdown_timeout_secs,
        DEFAULT_SHUTDOWN_TIMEOUT_SECS
    );
    // Negative flags: the file can only switch them on
    if config.server.graphiql == Some(false) {
        args.disable_graphiql = true;
    }

    // Store section
    if args.seed_file.is_none() {
        args.seed_file = config.store.seed_file.clone();
    }
    if config.store.seed == Some(false) {
        args.no_seed = true;
    }
    apply_if_default!(
        enforce_author_refs,
        config.store.enforce_author_refs,
        false
    );

    args
}
