use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Shorthand used by the in-memory adapters when they are toggled offline.
pub fn offline(name: &str) -> RepositoryError {
    RepositoryError::Backend(format!("{name} repository offline"))
}
