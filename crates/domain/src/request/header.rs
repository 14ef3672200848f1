//! HTTP Header types

/// Name of the header carrying bearer credentials.
pub const AUTHORIZATION: &str = "Authorization";

/// A single HTTP header with name and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// The header name (e.g., "Authorization")
    pub name: String,
    /// The header value (e.g., "Bearer abc")
    pub value: String,
}

impl Header {
    /// Creates a new header.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates an `Authorization: Bearer <token>` header.
    #[must_use]
    pub fn bearer(token: &str) -> Self {
        Self::new(AUTHORIZATION, format!("Bearer {token}"))
    }

    /// Returns true if the header name matches, ignoring ASCII case.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
