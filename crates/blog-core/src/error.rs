//! Domain-level error types.

use thiserror::Error;

/// Domain errors - invalid domain settings supplied from outside.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown id policy: {0} (expected `length` or `monotonic`)")]
    InvalidIdPolicy(String),
}

/// Repository-level errors.
///
/// A missing post is not an error: lookups return `Option` and deletes
/// return `bool`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage operation failed: {0}")]
    Operation(String),
}
