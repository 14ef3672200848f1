//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A request path is not an absolute API path.
    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// The base URL is empty or malformed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
