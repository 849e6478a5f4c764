//! GraphQL Axum routes
//!
//! The endpoint is served at both `/` and `/graphql`:
//!
//! - `POST` - Query and mutation execution
//! - `GET` - GraphiQL explorer (404 when disabled)

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::graphql::FolioSchema;

/// Shared state for GraphQL routes
#[derive(Clone)]
pub struct GraphQLState {
    pub schema: FolioSchema,
    /// Serve GraphiQL on GET
    pub graphiql: bool,
}

/// Create the GraphQL router with all endpoints
pub fn create_graphql_router(state: GraphQLState) -> Router {
    Router::new()
        .route("/", get(graphiql_handler).post(graphql_handler))
        .route("/graphql", get(graphiql_handler).post(graphql_handler))
        .with_state(state)
}

/// Handle GraphQL queries and mutations via POST
async fn graphql_handler(
    State(state): State<GraphQLState>,
    Json(request): Json<async_graphql::Request>,
) -> Response {
    debug!(operation = ?request.operation_name, "Executing GraphQL request");
    let response = state.schema.execute(request).await;
    if response.is_err() {
        debug!(errors = response.errors.len(), "GraphQL request returned errors");
    }
    (StatusCode::OK, Json(response)).into_response()
}

/// Serve the GraphiQL explorer via GET
async fn graphiql_handler(State(state): State<GraphQLState>) -> Response {
    if !state.graphiql {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(GraphiQLSource::build().endpoint("/").finish()).into_response()
}
