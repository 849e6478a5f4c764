//! HTTP router for the GraphQL endpoint and service probes
//!
//! - GraphQL endpoint and GraphiQL (`/`, `/graphql`)
//! - Health check (`/health`)
//! - Server information (`/info`)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::graphql::build_schema;
use crate::server::graphql_routes::{create_graphql_router, GraphQLState};
use crate::store::RecordStore;

/// Shared HTTP server state
#[derive(Clone)]
pub struct HttpServerState {
    /// Record store shared with the GraphQL schema
    pub store: Arc<RecordStore>,
    /// Server configuration
    pub config: ServerConfig,
    /// Server start time
    pub start_time: Instant,
}

impl HttpServerState {
    pub fn new(store: Arc<RecordStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config,
            start_time: Instant::now(),
        }
    }
}

/// Health check status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Server information
#[derive(Debug, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server version
    pub version: String,
    /// Address the endpoint was configured for
    pub http_addr: SocketAddr,
    /// Number of stored authors
    pub authors: usize,
    /// Number of stored articles
    pub articles: usize,
    /// Whether GraphiQL is served
    pub graphiql: bool,
    /// Uptime in seconds
    pub uptime_seconds: f64,
}

/// Build the full HTTP router
pub fn build_http_router(state: HttpServerState) -> Router {
    let graphql = create_graphql_router(GraphQLState {
        schema: build_schema(state.store.clone()),
        graphiql: state.config.graphiql,
    });

    Router::new()
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .with_state(state)
        .merge(graphql)
}

/// Health check endpoint handler
async fn health_handler() -> Response {
    let status = HealthStatus {
        status: "ok".to_string(),
    };
    (StatusCode::OK, Json(status)).into_response()
}

/// Server info endpoint handler
async fn info_handler(State(state): State<HttpServerState>) -> Response {
    let info = ServerInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        http_addr: state.config.http_addr,
        authors: state.store.author_count(),
        articles: state.store.article_count(),
        graphiql: state.config.graphiql,
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
    };

    (StatusCode::OK, Json(info)).into_response()
}
