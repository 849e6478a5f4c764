//! In-memory record store for authors and articles
//!
//! Each collection keeps records in insertion order alongside an id index and
//! its own monotonic id counter. Ids are never reused and never derived from
//! the current contents, so an empty collection accepts inserts like any other.
//!
//! The store is shared across request handlers as `Arc<RecordStore>`. All
//! state sits behind a single `RwLock`; a mutation assigns its id and appends
//! under one write guard, which keeps ids unique and appends ordered when
//! requests run on several threads.

pub mod model;
pub mod relations;
pub mod seed;

pub use model::{Article, Author, NewArticle, NewAuthor};
pub use relations::Relations;
pub use seed::SeedData;

use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::error::{RecordKind, StoreError};

/// Store behavior switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Reject articles whose `author_id` does not name an existing author
    pub enforce_author_refs: bool,
}

trait Keyed {
    const KIND: RecordKind;
    fn id(&self) -> i32;
}

impl Keyed for Author {
    const KIND: RecordKind = RecordKind::Author;
    fn id(&self) -> i32 {
        self.id
    }
}

impl Keyed for Article {
    const KIND: RecordKind = RecordKind::Article;
    fn id(&self) -> i32 {
        self.id
    }
}

/// Insertion-ordered records with an id index
#[derive(Debug)]
struct Collection<T> {
    records: Vec<T>,
    index: HashMap<i32, usize>,
    /// `None` once `i32::MAX` has been taken
    next_id: Option<i32>,
}

impl<T: Keyed + Clone> Collection<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            next_id: Some(1),
        }
    }

    /// Insert a record that already carries an id (seeding).
    ///
    /// The counter moves past the largest id seen so later inserts never collide.
    fn insert_existing(&mut self, record: T) -> Result<(), StoreError> {
        let id = record.id();
        if self.index.contains_key(&id) {
            return Err(StoreError::DuplicateId { kind: T::KIND, id });
        }
        if self.next_id.is_some_and(|next| id >= next) {
            self.next_id = id.checked_add(1);
        }
        self.push(record);
        Ok(())
    }

    /// The id the next append will receive. The counter moves in `append`.
    fn peek_id(&self) -> Result<i32, StoreError> {
        self.next_id.ok_or(StoreError::IdExhausted(T::KIND))
    }

    fn append(&mut self, record: T) {
        self.next_id = record.id().checked_add(1);
        self.push(record);
    }

    fn push(&mut self, record: T) {
        self.index.insert(record.id(), self.records.len());
        self.records.push(record);
    }

    fn get(&self, id: i32) -> Option<&T> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    fn contains(&self, id: i32) -> bool {
        self.index.contains_key(&id)
    }

    fn all(&self) -> Vec<T> {
        self.records.clone()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[derive(Debug)]
struct Tables {
    authors: Collection<Author>,
    articles: Collection<Article>,
}

/// Owner of the author and article collections
#[derive(Debug)]
pub struct RecordStore {
    tables: RwLock<Tables>,
    options: StoreOptions,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Create an empty store with default options
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create an empty store with the given options
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            tables: RwLock::new(Tables {
                authors: Collection::new(),
                articles: Collection::new(),
            }),
            options,
        }
    }

    /// Create a store pre-populated from seed data.
    ///
    /// Records keep the order they have in `seed`. Duplicate ids within a
    /// collection are rejected.
    pub fn with_seed(seed: SeedData, options: StoreOptions) -> Result<Self, StoreError> {
        let store = Self::with_options(options);
        {
            let mut tables = store.tables.write();
            for author in seed.authors {
                tables.authors.insert_existing(author)?;
            }
            for article in seed.articles {
                tables.articles.insert_existing(article)?;
            }
            info!(
                authors = tables.authors.len(),
                articles = tables.articles.len(),
                "Record store seeded"
            );
        }
        Ok(store)
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// All authors in insertion order
    pub fn list_authors(&self) -> Vec<Author> {
        self.tables.read().authors.all()
    }

    /// All articles in insertion order
    pub fn list_articles(&self) -> Vec<Article> {
        self.tables.read().articles.all()
    }

    /// Look up an author by id. A missing id is `None`, not an error.
    pub fn get_author(&self, id: i32) -> Option<Author> {
        self.tables.read().authors.get(id).cloned()
    }

    /// Look up an article by id. A missing id is `None`, not an error.
    pub fn get_article(&self, id: i32) -> Option<Article> {
        self.tables.read().articles.get(id).cloned()
    }

    /// Append a new author and return it with its assigned id
    pub fn add_author(&self, new: NewAuthor) -> Result<Author, StoreError> {
        new.validate()?;

        let mut tables = self.tables.write();
        let id = tables.authors.peek_id()?;
        let author = new.into_author(id);
        tables.authors.append(author.clone());

        debug!(id, total = tables.authors.len(), "Author appended");
        Ok(author)
    }

    /// Append a new article and return it with its assigned id.
    ///
    /// With [`StoreOptions::enforce_author_refs`] set, an unknown `author_id`
    /// is rejected and nothing is appended.
    pub fn add_article(&self, new: NewArticle) -> Result<Article, StoreError> {
        new.validate()?;

        let mut tables = self.tables.write();
        if self.options.enforce_author_refs && !tables.authors.contains(new.author_id) {
            return Err(StoreError::UnknownAuthor(new.author_id));
        }
        let id = tables.articles.peek_id()?;
        let article = new.into_article(id);
        tables.articles.append(article.clone());

        debug!(
            id,
            author_id = article.author_id,
            total = tables.articles.len(),
            "Article appended"
        );
        Ok(article)
    }

    pub fn author_count(&self) -> usize {
        self.tables.read().authors.len()
    }

    pub fn article_count(&self) -> usize {
        self.tables.read().articles.len()
    }
}

impl Relations for RecordStore {
    fn articles_by_author(&self, author_id: i32) -> Vec<Article> {
        self.tables
            .read()
            .articles
            .records
            .iter()
            .filter(|article| article.author_id == author_id)
            .cloned()
            .collect()
    }

    fn author_of(&self, article: &Article) -> Option<Author> {
        self.get_author(article.author_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> RecordStore {
        let seed = SeedData {
            authors: vec![Author {
                id: 1,
                name: "A".to_string(),
            }],
            articles: vec![Article {
                id: 1,
                author_id: 1,
                title: "T".to_string(),
                content: "C".to_string(),
            }],
        };
        RecordStore::with_seed(seed, StoreOptions::default()).unwrap()
    }

    #[test]
    fn test_add_article_assigns_next_id() {
        let store = seeded();
        let article = store.add_article(NewArticle::new(1, "T2", "C2")).unwrap();

        assert_eq!(
            article,
            Article {
                id: 2,
                author_id: 1,
                title: "T2".to_string(),
                content: "C2".to_string(),
            }
        );
        let ids: Vec<i32> = store.list_articles().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_empty_store_accepts_inserts() {
        let store = RecordStore::new();
        assert_eq!(store.add_author(NewAuthor::new("First")).unwrap().id, 1);
        assert_eq!(store.add_author(NewAuthor::new("Second")).unwrap().id, 2);
        assert_eq!(
            store.add_article(NewArticle::new(1, "T", "C")).unwrap().id,
            1
        );
    }

    #[test]
    fn test_seed_counter_follows_max_id() {
        let seed = SeedData {
            authors: vec![
                Author {
                    id: 10,
                    name: "Ten".to_string(),
                },
                Author {
                    id: 4,
                    name: "Four".to_string(),
                },
            ],
            articles: vec![],
        };
        let store = RecordStore::with_seed(seed, StoreOptions::default()).unwrap();

        let names: Vec<String> = store.list_authors().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Ten", "Four"]);
        assert_eq!(store.add_author(NewAuthor::new("Next")).unwrap().id, 11);
    }

    #[test]
    fn test_duplicate_seed_ids_rejected() {
        let dup = Author {
            id: 2,
            name: "Dup".to_string(),
        };
        let seed = SeedData {
            authors: vec![dup.clone(), dup],
            articles: vec![],
        };
        let err = RecordStore::with_seed(seed, StoreOptions::default()).unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateId {
                kind: RecordKind::Author,
                id: 2
            }
        );
    }

    #[test]
    fn test_validation_failure_has_no_side_effects() {
        let store = seeded();
        let err = store.add_article(NewArticle::new(1, "", "C")).unwrap_err();
        assert_eq!(err, StoreError::MissingField("title"));
        assert_eq!(store.article_count(), 1);

        // the failed call must not consume an id
        assert_eq!(
            store.add_article(NewArticle::new(1, "T", "C")).unwrap().id,
            2
        );
    }

    #[test]
    fn test_unknown_author_allowed_by_default() {
        let store = seeded();
        let article = store.add_article(NewArticle::new(99, "T", "C")).unwrap();
        assert_eq!(article.author_id, 99);
        assert_eq!(store.author_of(&article), None);
    }

    #[test]
    fn test_enforced_author_refs() {
        let store = RecordStore::with_options(StoreOptions {
            enforce_author_refs: true,
        });
        assert_eq!(
            store.add_article(NewArticle::new(1, "T", "C")),
            Err(StoreError::UnknownAuthor(1))
        );
        assert_eq!(store.article_count(), 0);

        let author = store.add_author(NewAuthor::new("A")).unwrap();
        assert!(store
            .add_article(NewArticle::new(author.id, "T", "C"))
            .is_ok());
    }

    #[test]
    fn test_id_exhaustion() {
        let seed = SeedData {
            authors: vec![Author {
                id: i32::MAX - 1,
                name: "Almost".to_string(),
            }],
            articles: vec![],
        };
        let store = RecordStore::with_seed(seed, StoreOptions::default()).unwrap();
        assert_eq!(
            store.add_author(NewAuthor::new("Last")).unwrap().id,
            i32::MAX
        );
        assert_eq!(
            store.add_author(NewAuthor::new("Overflow")),
            Err(StoreError::IdExhausted(RecordKind::Author))
        );
        assert_eq!(store.author_count(), 2);
    }

    #[test]
    fn test_seed_with_max_id() {
        let seed = SeedData {
            authors: vec![Author {
                id: i32::MAX,
                name: "Max".to_string(),
            }],
            articles: vec![Article {
                id: 1,
                author_id: i32::MAX,
                title: "T".to_string(),
                content: "C".to_string(),
            }],
        };
        let store = RecordStore::with_seed(seed, StoreOptions::default()).unwrap();
        assert_eq!(store.get_author(i32::MAX).map(|a| a.name), Some("Max".to_string()));
        assert_eq!(store.articles_by_author(i32::MAX).len(), 1);

        assert_eq!(
            store.add_author(NewAuthor::new("Overflow")),
            Err(StoreError::IdExhausted(RecordKind::Author))
        );
        // the other collection has its own counter
        assert_eq!(store.add_article(NewArticle::new(i32::MAX, "T2", "C2")).unwrap().id, 2);
    }

    #[test]
    fn test_options_are_kept() {
        let options = StoreOptions {
            enforce_author_refs: true,
        };
        assert_eq!(RecordStore::with_options(options).options(), options);
        assert_eq!(RecordStore::new().options(), StoreOptions::default());
    }
}
