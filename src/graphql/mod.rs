//! GraphQL API module for Folio
//!
//! Exposes authors and articles held in the [`RecordStore`].
//!
//! # Example Queries
//!
//! ```graphql
//! # List all articles with their author
//! query {
//!   articles {
//!     id
//!     title
//!     author { name }
//!   }
//! }
//!
//! # One author and everything they wrote
//! query {
//!   author(id: 1) {
//!     name
//!     articles { id title }
//!   }
//! }
//!
//! # Add an author, then an article
//! mutation {
//!   addAuthor(name: "Barbara Liskov") { id }
//! }
//!
//! mutation {
//!   addArticle(authorId: 4, title: "Data Abstraction", content: "...") {
//!     id
//!     authorId
//!   }
//! }
//! ```

pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, ErrorExtensions, Schema};
use std::sync::Arc;

use crate::error::StoreError;
use crate::store::RecordStore;

use self::mutation::MutationRoot;
use self::query::QueryRoot;

/// The full GraphQL schema type for Folio
pub type FolioSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema around a shared record store
pub fn build_schema(store: Arc<RecordStore>) -> FolioSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Convert a store error into a GraphQL error carrying an `extensions.code`
pub(crate) fn store_error(err: StoreError) -> async_graphql::Error {
    let code = err.code();
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}
