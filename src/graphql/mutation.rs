//! GraphQL mutation resolvers
//!
//! Append-only inserts. Missing arguments are rejected by schema validation
//! before these run; blank strings and (optionally) unknown authors are
//! rejected by the store. A rejected call leaves the store untouched.

use async_graphql::{Context, Object, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::graphql::store_error;
use crate::graphql::types::{Article, Author};
use crate::store::{NewArticle, NewAuthor, RecordStore};

/// GraphQL Mutation root
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create an article and return it with its assigned id
    async fn add_article(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Id of the author")] author_id: i32,
        #[graphql(desc = "Article title")] title: String,
        #[graphql(desc = "Article body")] content: String,
    ) -> Result<Article> {
        let store = ctx.data::<Arc<RecordStore>>()?;

        let article = store
            .add_article(NewArticle::new(author_id, title, content))
            .map_err(|e| {
                warn!(author_id, error = %e, "Rejected addArticle");
                store_error(e)
            })?;

        info!(id = article.id, author_id, "Article added");
        Ok(Article(article))
    }

    /// Create an author and return it with its assigned id
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Author name")] name: String,
    ) -> Result<Author> {
        let store = ctx.data::<Arc<RecordStore>>()?;

        let author = store.add_author(NewAuthor::new(name)).map_err(|e| {
            warn!(error = %e, "Rejected addAuthor");
            store_error(e)
        })?;

        info!(id = author.id, "Author added");
        Ok(Author(author))
    }
}
