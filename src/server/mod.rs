//! Server implementation for Folio
//!
//! [`Server`] owns the record store and serves the HTTP router until a
//! shutdown signal arrives.

pub mod graphql_routes;
pub mod http;

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::{FolioError, Result};
use crate::store::RecordStore;

use self::http::{build_http_router, HttpServerState};

/// The Folio GraphQL server
pub struct Server {
    config: ServerConfig,
    store: Arc<RecordStore>,
}

impl Server {
    /// Create a server, seeding the record store from the configured source
    pub fn new(config: ServerConfig) -> Result<Self> {
        let seed = config.seed.load()?;
        let store = RecordStore::with_seed(seed, config.store)?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Create a server around an existing store
    pub fn with_store(config: ServerConfig, store: Arc<RecordStore>) -> Self {
        Self { config, store }
    }

    /// Get the shared record store
    pub fn store(&self) -> Arc<RecordStore> {
        self.store.clone()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let addr = self.config.http_addr;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                FolioError::Server(format!(
                    "HTTP port {} is already in use. \
                     Fix: Use --port to pick a different port, \
                     or stop the existing process.",
                    addr.port()
                ))
            } else {
                FolioError::Server(format!("Failed to bind HTTP server to {}: {}", addr, e))
            }
        })?;

        self.serve(listener, async {
            if let Err(e) = signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// In-flight requests get up to the configured shutdown timeout to finish.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr: SocketAddr = listener.local_addr()?;
        let timeout = self.config.shutdown_timeout;
        let state = HttpServerState::new(self.store.clone(), self.config.clone());
        let app = build_http_router(state);

        info!(
            addr = %local_addr,
            authors = self.store.author_count(),
            articles = self.store.article_count(),
            graphiql = self.config.graphiql,
            "Folio GraphQL server listening"
        );

        let (stop_tx, mut stop_rx) = watch::channel(false);
        let signal = async move {
            shutdown.await;
            info!("Shutdown signal received");
            let _ = stop_tx.send(true);
        };

        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .into_future();
        let deadline = async move {
            if stop_rx.wait_for(|stopped| *stopped).await.is_ok() {
                tokio::time::sleep(timeout).await;
            } else {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = serve => {
                result.map_err(|e| FolioError::Server(format!("HTTP server error: {e}")))?;
                info!("Server stopped");
            }
            _ = deadline => {
                warn!(
                    timeout_secs = timeout.as_secs(),
                    "Graceful shutdown timed out, dropping open connections"
                );
            }
        }

        Ok(())
    }
}
