//! Error types for Folio
//!
//! [`StoreError`] covers everything the record store can reject; resolvers
//! translate it into GraphQL errors. [`FolioError`] is the process-level error
//! returned by configuration, seeding, and server startup.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// The two record collections held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Author,
    Article,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Author => write!(f, "author"),
            RecordKind::Article => write!(f, "article"),
        }
    }
}

/// Errors raised by the record store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("missing required argument: {0}")]
    MissingField(&'static str),

    #[error("author {0} does not exist")]
    UnknownAuthor(i32),

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: RecordKind, id: i32 },

    #[error("{0} id space exhausted")]
    IdExhausted(RecordKind),
}

impl StoreError {
    /// Whether the error was caused by caller input rather than store state.
    ///
    /// Validation failures are reported to GraphQL clients as `BAD_USER_INPUT`.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::MissingField(_) | StoreError::UnknownAuthor(_)
        )
    }

    /// GraphQL error extension code for this error
    pub fn code(&self) -> &'static str {
        if self.is_validation() {
            "BAD_USER_INPUT"
        } else {
            "INTERNAL_SERVER_ERROR"
        }
    }
}

/// Main error type for Folio
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid seed file {path:?}: {source}")]
    Seed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
