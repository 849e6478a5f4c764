//! GraphQL query resolvers
//!
//! Read-only access to authors and articles. Lookups by id return null for
//! unknown ids rather than an error. List fields are nullable lists of
//! nullable items (`[Article]`, `[Author]`).

use async_graphql::{Context, Object, Result};
use std::sync::Arc;
use tracing::debug;

use crate::graphql::types::{Article, Author};
use crate::store::RecordStore;

/// GraphQL Query root
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List all articles in insertion order
    async fn articles(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Article>>>> {
        let store = ctx.data::<Arc<RecordStore>>()?;
        Ok(Some(
            store
                .list_articles()
                .into_iter()
                .map(|article| Some(Article(article)))
                .collect(),
        ))
    }

    /// List all authors in insertion order
    async fn authors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Author>>>> {
        let store = ctx.data::<Arc<RecordStore>>()?;
        Ok(Some(
            store
                .list_authors()
                .into_iter()
                .map(|author| Some(Author(author)))
                .collect(),
        ))
    }

    /// Get a single article by id
    async fn article(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Article id")] id: Option<i32>,
    ) -> Result<Option<Article>> {
        let store = ctx.data::<Arc<RecordStore>>()?;
        let Some(id) = id else {
            return Ok(None);
        };

        let article = store.get_article(id);
        if article.is_none() {
            debug!(id, "Article not found");
        }
        Ok(article.map(Article))
    }

    /// Get a single author by id
    async fn author(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Author id")] id: Option<i32>,
    ) -> Result<Option<Author>> {
        let store = ctx.data::<Arc<RecordStore>>()?;
        let Some(id) = id else {
            return Ok(None);
        };

        let author = store.get_author(id);
        if author.is_none() {
            debug!(id, "Author not found");
        }
        Ok(author.map(Author))
    }
}
