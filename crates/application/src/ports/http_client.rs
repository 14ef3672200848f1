//! HTTP Client port

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;
use ttml_smoke_domain::{RequestSpec, ResponseSpec};

/// Transport-level failures. A check hitting one of these fails with the
/// error text; the run carries on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The resolved URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying message.
        message: String,
    },

    /// The server refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// Any other connection failure (TLS, reset, ...).
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit.
        max: usize,
    },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Anything else reported by the client.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, so the suite can be
/// driven by a scripted client in tests.
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the response.
    ///
    /// Any status code is a successful exchange; only transport failures are
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues,
    /// timeout, or an unreadable body.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>>;
}
