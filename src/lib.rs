#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

//! # Folio
//!
//! Folio is a small GraphQL service over two in-memory record types,
//! authors and articles, with read queries and two insert mutations.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run with defaults (listens on 0.0.0.0:8080, built-in sample data)
//! $ ./folio
//!
//! # Pick a port and load your own data
//! $ PORT=4000 ./folio --seed-file ./seed.json
//! ```
//!
//! Open `http://localhost:8080/` in a browser for GraphiQL, or POST queries:
//!
//! ```bash
//! $ curl -s localhost:8080/ -H 'content-type: application/json' \
//!     -d '{"query":"{ authors { name articles { title } } }"}'
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use folio::store::{NewAuthor, RecordStore};
//!
//! # async fn example() {
//! let store = Arc::new(RecordStore::new());
//! store.add_author(NewAuthor::new("Ada Lovelace")).ok();
//!
//! let schema = folio::graphql::build_schema(store);
//! let response = schema.execute("{ authors { id name } }").await;
//! println!("{}", serde_json::to_string(&response).unwrap_or_default());
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`store`]: record store, relations between records, seed data
//! - [`graphql`]: schema, query and mutation resolvers
//! - [`server`]: axum HTTP transport
//! - [`config`]: CLI arguments, config file, and server configuration
//! - [`error`]: error types and Result alias
//!
//! ## Configuration
//!
//! | Option | Env Variable | Default | Description |
//! |--------|--------------|---------|-------------|
//! | `--host` | `FOLIO_HOST` | `0.0.0.0` | Bind host |
//! | `--port` | `PORT` | `8080` | HTTP port |
//! | `--log-level` | `FOLIO_LOG_LEVEL` | `info` | Log filter |
//! | `--seed-file` | `FOLIO_SEED_FILE` | built-in | Initial records (JSON) |
//! | `--no-seed` | `FOLIO_NO_SEED` | `false` | Start empty |
//! | `--disable-graphiql` | `FOLIO_DISABLE_GRAPHIQL` | `false` | Hide GraphiQL |
//! | `--enforce-author-refs` | `FOLIO_ENFORCE_AUTHOR_REFS` | `false` | Reject unknown `authorId` |
//!
//! See [`ServerArgs`] for the complete list of options.

pub mod config;
pub mod error;
pub mod graphql;
pub mod server;
pub mod store;

pub use config::{ServerArgs, ServerConfig};
pub use error::{FolioError, Result, StoreError};
pub use server::Server;
pub use store::RecordStore;
