//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! One client is built per run and reused for every check.

use std::error::Error as _;
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use tracing::trace;
use ttml_smoke_application::SuiteConfig;
use ttml_smoke_application::ports::{HttpClient, HttpClientError};
use ttml_smoke_domain::{HttpMethod, RequestSpec, ResponseSpec};
use url::Url;

/// Redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
///
/// Every request carries `Content-Type: application/json` and the configured
/// User-Agent.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a client for the given suite configuration.
    ///
    /// Default configuration:
    /// - Request timeout: `config.timeout_ms`
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: `config.user_agent`
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(config: &SuiteConfig) -> Result<Self, HttpClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        let message = error_chain(error);
        if error.is_connect() {
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                let port = error
                    .url()
                    .and_then(Url::port_or_known_default)
                    .unwrap_or(80);
                return HttpClientError::ConnectionRefused { host, port };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_body() || error.is_decode() {
            return HttpClientError::Body(message);
        }

        HttpClientError::Other(message)
    }
}

/// Joins an error with its sources; reqwest keeps the useful part
/// ("Connection refused", "failed to lookup address") in the chain.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>> {
        // Clone what we need to move into the async block
        let method = request.method;
        let url = request.url.clone();
        let headers = request.headers.clone();
        let body = request.body.clone();
        let timeout_ms = request.timeout_ms;

        Box::pin(async move {
            let parsed_url =
                Url::parse(&url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")))?;

            let start = Instant::now();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), parsed_url)
                .timeout(Duration::from_millis(timeout_ms));

            for header in &headers {
                builder = builder.header(&header.name, &header.value);
            }

            if let Some(body) = &body {
                builder = builder.json(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status();
            let status_text = status.canonical_reason().unwrap_or_default().to_string();

            let text = response
                .text()
                .await
                .map_err(|e| HttpClientError::Body(error_chain(&e)))?;
            let duration = start.elapsed();
            trace!(status = status.as_u16(), bytes = text.len(), "body read");

            Ok(ResponseSpec::new(status.as_u16(), status_text, text, duration))
        })
    }
}
