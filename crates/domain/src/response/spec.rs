//! Response type returned by the HTTP client port

use std::time::Duration;

use serde_json::Value;

/// HTTP response as observed by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    /// HTTP status code
    pub status: u16,
    /// Status text (e.g., "OK", "Not Found")
    pub status_text: String,
    /// Response body as string
    pub body: String,
    /// Response time
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates a new response.
    #[must_use]
    pub fn new(
        status: u16,
        status_text: impl Into<String>,
        body: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
            duration,
        }
    }

    /// Parses the body as JSON, if it is JSON.
    #[must_use]
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Reads a top-level string field of a JSON object body.
    #[must_use]
    pub fn str_field(&self, name: &str) -> Option<String> {
        self.json()?
            .get(name)?
            .as_str()
            .map(ToString::to_string)
    }

    /// Reads a top-level identifier field, accepting strings and integers.
    #[must_use]
    pub fn id_field(&self, name: &str) -> Option<String> {
        match self.json()?.get(name)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
            _ => None,
        }
    }

    /// Status line used in failure messages, e.g. `404 Not Found`.
    #[must_use]
    pub fn status_line(&self) -> String {
        if self.status_text.is_empty() {
            self.status.to_string()
        } else {
            format!("{} {}", self.status, self.status_text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ResponseSpec {
        ResponseSpec::new(status, "", body, Duration::from_millis(5))
    }

    #[test]
    fn test_str_field() {
        let r = response(200, r#"{"token": "abc", "count": 3}"#);
        assert_eq!(r.str_field("token").as_deref(), Some("abc"));
        assert_eq!(r.str_field("count"), None);
        assert_eq!(r.str_field("missing"), None);
    }

    #[test]
    fn test_str_field_on_plain_text() {
        let r = response(502, "Bad Gateway");
        assert_eq!(r.json(), None);
        assert_eq!(r.str_field("status"), None);
    }

    #[test]
    fn test_id_field_accepts_numbers_and_strings() {
        assert_eq!(
            response(200, r#"{"letter_id": 42}"#).id_field("letter_id").as_deref(),
            Some("42")
        );
        assert_eq!(
            response(200, r#"{"letter_id": "ltr_9"}"#).id_field("letter_id").as_deref(),
            Some("ltr_9")
        );
        assert_eq!(response(200, r#"{"letter_id": ""}"#).id_field("letter_id"), None);
        assert_eq!(response(200, r#"{"letter_id": null}"#).id_field("letter_id"), None);
    }

    #[test]
    fn test_status_line() {
        let mut r = response(404, "");
        assert_eq!(r.status_line(), "404");
        r.status_text = "Not Found".to_string();
        assert_eq!(r.status_line(), "404 Not Found");
    }
}
