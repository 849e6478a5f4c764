//! Derived author/article associations
//!
//! Relations are computed on demand by key matching; nothing is stored.

use super::model::{Article, Author};

/// One method per relation between authors and articles.
///
/// Ids compare as plain `i32` values.
pub trait Relations {
    /// Articles whose `author_id` equals `author_id`, in article insertion order
    fn articles_by_author(&self, author_id: i32) -> Vec<Article>;

    /// The author an article points at, if one exists
    fn author_of(&self, article: &Article) -> Option<Author>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{NewArticle, NewAuthor, RecordStore};

    #[test]
    fn test_articles_by_author_keeps_article_order() {
        let store = RecordStore::new();
        let ada = store.add_author(NewAuthor::new("Ada")).unwrap();
        let bob = store.add_author(NewAuthor::new("Bob")).unwrap();

        store.add_article(NewArticle::new(ada.id, "one", "c")).unwrap();
        store.add_article(NewArticle::new(bob.id, "two", "c")).unwrap();
        store.add_article(NewArticle::new(ada.id, "three", "c")).unwrap();

        let titles: Vec<String> = store
            .articles_by_author(ada.id)
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["one", "three"]);
        assert!(store.articles_by_author(404).is_empty());
    }

    #[test]
    fn test_relation_round_trip() {
        let store = RecordStore::new();
        let author = store.add_author(NewAuthor::new("Ada")).unwrap();
        let article = store
            .add_article(NewArticle::new(author.id, "t", "c"))
            .unwrap();

        let resolved = store.author_of(&article).unwrap();
        assert_eq!(resolved, author);
        assert!(store.articles_by_author(resolved.id).contains(&article));
    }
}
