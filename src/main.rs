//! Folio - a GraphQL endpoint for authors and articles

use clap::Parser;
use folio::config::{merge_config_with_args, ConfigFile};
use folio::{FolioError, Result, Server, ServerArgs, ServerConfig};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    if let Err(e) = run() {
        eprintln!("Folio failed to start: {e}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let mut args = ServerArgs::parse();

    if args.generate_config {
        println!("{}", ConfigFile::generate_example());
        return Ok(());
    }

    // Load configuration file if specified or from the working directory
    let loaded = match args.config {
        Some(ref path) => ConfigFile::load(path).map(Some),
        None => ConfigFile::load_default(),
    };
    let config_file = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration file: {}", e);
            return Err(e);
        }
    };

    // CLI takes precedence
    if let Some(ref config) = config_file {
        args = merge_config_with_args(args, config);
    }

    let log_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(log_filter)
        .init();

    if config_file.is_some() {
        info!("Configuration loaded from file");
    }

    let config = match ServerConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to create configuration");
            return Err(e);
        }
    };

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            error!(error = %e, "Failed to create Tokio runtime");
            FolioError::Server(format!("Failed to create Tokio runtime: {}", e))
        })?;

    runtime.block_on(run_server(config))
}

async fn run_server(config: ServerConfig) -> Result<()> {
    if !config.store.enforce_author_refs {
        info!("Articles may reference authors that do not exist (--enforce-author-refs to reject)");
    }

    let server = match Server::new(config) {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "Failed to create server");
            return Err(e);
        }
    };

    if let Err(e) = server.run().await {
        error!(error = %e, "Server error");
        return Err(e);
    }
    Ok(())
}
