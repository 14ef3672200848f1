//! Application error types

use thiserror::Error;
use ttml_smoke_domain::DomainError;

/// Errors that abort the remaining phases of a run.
///
/// Check-level problems (status mismatch, transport failure) are never
/// errors; they become failed outcomes.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// A check could not be built.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A request body could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An account needed by a phase is not configured.
    #[error("no account configured for role {0}")]
    MissingAccount(String),
}

/// Result type alias for suite operations.
pub type SuiteResult<T> = Result<T, SuiteError>;
