//! Error types for store operations.

use crate::data::Key;

/// Boxed error produced by user callbacks and persistence backends.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by [`Store`](crate::Store) methods.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("mutation not found: `{0}`")]
    NotFound(String),

    #[error("effect bound to `{key}` failed")]
    Effect {
        key: Key,
        #[source]
        source: BoxError,
    },

    #[error("mutation `{name}` failed")]
    Mutation {
        name: String,
        #[source]
        source: BoxError,
    },

    #[error("persistence backend failed")]
    Backend(#[source] BoxError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, StoreError>;
