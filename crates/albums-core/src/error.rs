//! Domain error types.
//!
//! The `Display` text of `InvalidInput` and `NotFound` is sent verbatim to
//! HTTP clients, so existing consumers match on it.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed identifier, missing or mistyped field, negative price.
    #[error("{0}")]
    InvalidInput(String),

    /// No record exists for the requested identifier.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
