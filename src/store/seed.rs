//! Startup data for the record store
//!
//! A seed file is JSON with two arrays:
//!
//! ```json
//! {
//!   "authors":  [{ "id": 1, "name": "Ada Lovelace" }],
//!   "articles": [{ "id": 1, "authorId": 1, "title": "Notes", "content": "..." }]
//! }
//! ```
//!
//! Either array may be omitted.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::model::{Article, Author};
use crate::error::{FolioError, Result};

/// Records loaded into the store at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub authors: Vec<Author>,
    pub articles: Vec<Article>,
}

impl SeedData {
    /// Empty seed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Data used when no seed file is configured
    pub fn builtin() -> Self {
        let authors = [
            (1, "Ada Lovelace"),
            (2, "Alan Turing"),
            (3, "Grace Hopper"),
        ]
        .into_iter()
        .map(|(id, name)| Author {
            id,
            name: name.to_string(),
        })
        .collect();

        let articles = [
            (
                1,
                1,
                "Notes on the Analytical Engine",
                "The engine might act upon other things besides number.",
            ),
            (
                2,
                2,
                "On Computable Numbers",
                "A number is computable if its decimal can be written down by a machine.",
            ),
            (
                3,
                2,
                "Computing Machinery and Intelligence",
                "I propose to consider the question, can machines think?",
            ),
            (
                4,
                3,
                "The Education of a Computer",
                "Compilers let the machine take over the routine work of programming.",
            ),
        ]
        .into_iter()
        .map(|(id, author_id, title, content)| Article {
            id,
            author_id,
            title: title.to_string(),
            content: content.to_string(),
        })
        .collect();

        Self { authors, articles }
    }

    /// Parse seed data from a JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load seed data from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Config(format!("Failed to read seed file {:?}: {}", path, e))
        })?;

        Self::from_json(&contents).map_err(|source| FolioError::Seed {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_articles_reference_builtin_authors() {
        let seed = SeedData::builtin();
        assert!(!seed.authors.is_empty());
        for article in &seed.articles {
            assert!(seed.authors.iter().any(|a| a.id == article.author_id));
        }
    }

    #[test]
    fn test_from_json_partial() {
        let seed = SeedData::from_json(r#"{ "authors": [{ "id": 5, "name": "E" }] }"#).unwrap();
        assert_eq!(seed.authors.len(), 1);
        assert!(seed.articles.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "articles": [{{ "id": 2, "authorId": 7, "title": "T", "content": "C" }}] }}"#
        )
        .unwrap();

        let seed = SeedData::load(file.path()).unwrap();
        assert_eq!(seed.articles[0].author_id, 7);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "authors": [{{ "id": "one" }}] }}"#).unwrap();

        let err = SeedData::load(file.path()).unwrap_err();
        assert!(matches!(err, FolioError::Seed { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SeedData::load("/nonexistent/folio-seed.json").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }
}
