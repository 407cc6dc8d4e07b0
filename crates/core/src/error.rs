//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic validation failures of catalog values.
/// Transport and IO failures belong to the loader.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A price could not be read as a finite, non-negative number.
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_price(raw: impl Into<String>) -> Self {
        Self::InvalidPrice(raw.into())
    }
}
