//! Record types held by the store
//!
//! Field names serialize in camelCase so seed files use the same keys the
//! GraphQL schema exposes (`authorId`).

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A stored author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i32,
    pub name: String,
}

/// A stored article.
///
/// `author_id` is a plain key; it is not required to match an existing author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub content: String,
}

/// Arguments for creating an author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Check required fields before an id is assigned
    pub fn validate(&self) -> Result<(), StoreError> {
        require("name", &self.name)
    }

    pub(crate) fn into_author(self, id: i32) -> Author {
        Author {
            id,
            name: self.name,
        }
    }
}

/// Arguments for creating an article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub author_id: i32,
    pub title: String,
    pub content: String,
}

impl NewArticle {
    pub fn new(author_id: i32, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author_id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Check required fields before an id is assigned
    pub fn validate(&self) -> Result<(), StoreError> {
        require("title", &self.title)?;
        require("content", &self.content)
    }

    pub(crate) fn into_article(self, id: i32) -> Article {
        Article {
            id,
            author_id: self.author_id,
            title: self.title,
            content: self.content,
        }
    }
}

/// Blank strings count as a missing argument.
fn require(field: &'static str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::MissingField(field));
    }
    Ok(())
}
