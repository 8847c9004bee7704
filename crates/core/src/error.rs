//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// There are exactly two failure kinds. Reads of an absent resource are
/// `NotFound`; everything that rejects a mutation (missing field, bad value,
/// unknown id referenced by a write) is `InvalidInput`. The message carried by
/// `InvalidInput` is meant for logs, not for clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested resource was not found.
    #[error("not found")]
    NotFound,

    /// A request was rejected before touching the store.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
