//! GraphQL object types for the Folio API
//!
//! Both types wrap a store record. `Author.articles` and `Article.author` are
//! resolved on demand through the store's [`Relations`] implementation.

use async_graphql::{Context, Object, Result};
use std::sync::Arc;

use crate::store::{self, Relations, RecordStore};

/// An author
#[derive(Clone, Debug)]
pub struct Author(pub store::Author);

#[Object]
impl Author {
    /// Author id
    async fn id(&self) -> i32 {
        self.0.id
    }

    /// Display name
    async fn name(&self) -> &str {
        &self.0.name
    }

    /// Articles written by this author, in publication order
    async fn articles(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Article>>>> {
        let store = ctx.data::<Arc<RecordStore>>()?;
        Ok(Some(
            store
                .articles_by_author(self.0.id)
                .into_iter()
                .map(|article| Some(Article(article)))
                .collect(),
        ))
    }
}

/// An article
#[derive(Clone, Debug)]
pub struct Article(pub store::Article);

#[Object]
impl Article {
    /// Article id
    async fn id(&self) -> i32 {
        self.0.id
    }

    /// Id of the author this article is attributed to
    async fn author_id(&self) -> i32 {
        self.0.author_id
    }

    /// Article title
    async fn title(&self) -> &str {
        &self.0.title
    }

    /// Article body
    async fn content(&self) -> &str {
        &self.0.content
    }

    /// The author of this article, or null if `authorId` matches no author
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let store = ctx.data::<Arc<RecordStore>>()?;
        Ok(store.author_of(&self.0).map(Author))
    }
}
