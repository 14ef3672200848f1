//! Check requests and the resolved requests sent over the wire.

use serde_json::Value;

use super::{Header, HttpMethod};
use crate::error::{DomainError, DomainResult};

/// Status code a check expects unless told otherwise.
pub const DEFAULT_EXPECTED_STATUS: u16 = 200;

/// One request of the checklist, relative to the suite's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute API path (e.g. `/api/health`).
    pub path: String,
    /// Optional JSON body.
    pub body: Option<Value>,
    /// Extra headers for this request only.
    pub headers: Vec<Header>,
    /// Status code the check passes on.
    pub expected_status: u16,
}

impl CheckRequest {
    /// Creates a request with the given method and path, expecting 200.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: Vec::new(),
            expected_status: DEFAULT_EXPECTED_STATUS,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(HttpMethod::Post, path).with_body(body)
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, header: Header) -> Self {
        self.headers.push(header);
        self
    }

    /// Attaches `Authorization: Bearer <token>` when a token is given.
    #[must_use]
    pub fn with_bearer(self, token: Option<&str>) -> Self {
        match token {
            Some(token) => self.with_header(Header::bearer(token)),
            None => self,
        }
    }

    /// Sets the expected status code.
    #[must_use]
    pub const fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Resolves this check against a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidPath`] if the path is not absolute or
    /// contains whitespace, and [`DomainError::InvalidBaseUrl`] if the base URL
    /// is not an `http(s)` URL.
    pub fn resolve(&self, base_url: &str, timeout_ms: u64) -> DomainResult<RequestSpec> {
        if !self.path.starts_with('/') || self.path.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidPath(self.path.clone()));
        }

        let base = base_url.trim().trim_end_matches('/');
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(DomainError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(RequestSpec {
            method: self.method,
            url: format!("{base}{}", self.path),
            headers: self.headers.clone(),
            body: self.body.clone(),
            timeout_ms,
        })
    }
}

/// A fully resolved request ready for the HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL.
    pub url: String,
    /// Request headers.
    pub headers: Vec<Header>,
    /// Optional JSON body.
    pub body: Option<Value>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl RequestSpec {
    /// Returns the value of the first header with the given name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.is(name))
            .map(|h| h.value.as_str())
    }
}
