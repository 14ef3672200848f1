//! End-to-end runs of the smoke suite over real HTTP.
//!
//! An axum server on 127.0.0.1 plays the application under test; the suite
//! talks to it through `ReqwestHttpClient`.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use ttml_smoke_application::{SmokeSuite, SuiteConfig};
use ttml_smoke_domain::Phase;
use ttml_smoke_infrastructure::{ConsoleReporter, ReqwestHttpClient, SystemClock};

/// One request as the fake backend saw it.
#[derive(Debug, Clone)]
struct Seen {
    method: Method,
    path: String,
    authorization: Option<String>,
    user_agent: Option<String>,
    content_type: Option<String>,
}

type SeenLog = Arc<Mutex<Vec<Seen>>>;

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn json_response(status: StatusCode, body: Value) -> Response {
    (status, axum::Json(body)).into_response()
}

/// A deployment where the employee account is broken, the detailed health
/// probe is down and commission management errors out.
async fn backend(
    State(seen): State<SeenLog>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    let authorization = header_value(&headers, header::AUTHORIZATION);
    seen.lock().unwrap().push(Seen {
        method: method.clone(),
        path: path.clone(),
        authorization: authorization.clone(),
        user_agent: header_value(&headers, header::USER_AGENT),
        content_type: header_value(&headers, header::CONTENT_TYPE),
    });

    let bearer = authorization.as_deref().and_then(|a| a.strip_prefix("Bearer "));
    let allowed = |token: &str| {
        if bearer == Some(token) {
            json_response(StatusCode::OK, json!({"ok": true}))
        } else {
            json_response(StatusCode::FORBIDDEN, json!({"error": "Forbidden"}))
        }
    };

    match (method.as_str(), path.as_str()) {
        ("GET", "/api/health") => json_response(StatusCode::OK, json!({"status": "healthy"})),
        ("GET", "/api/health/detailed") => {
            (StatusCode::SERVICE_UNAVAILABLE, "database unreachable").into_response()
        }
        ("POST", "/api/auth/login" | "/api/auth/admin-login") => {
            let email = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("email").and_then(Value::as_str).map(ToString::to_string))
                .unwrap_or_default();
            let token = match (path.as_str(), email.as_str()) {
                ("/api/auth/login", "test-subscriber@ttml-test.com") => "sub-token",
                ("/api/auth/admin-login", "test-superadmin@ttml-test.com") => "admin-token",
                ("/api/auth/admin-login", "test-attorney@ttml-test.com") => "atty-token",
                _ => {
                    return json_response(
                        StatusCode::UNAUTHORIZED,
                        json!({"error": "Invalid credentials"}),
                    );
                }
            };
            json_response(
                StatusCode::OK,
                json!({"token": token, "message": "Login successful"}),
            )
        }
        ("POST", "/api/letters/generate") if bearer == Some("sub-token") => {
            json_response(StatusCode::OK, json!({"letter_id": "ltr_1"}))
        }
        ("GET", "/api/stripe/config" | "/api/subscription/plans") => {
            json_response(StatusCode::OK, json!({"plans": []}))
        }
        ("GET", "/api/secure-admin-gateway/commissions") => {
            (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
        }
        ("GET", p) if p.starts_with("/api/secure-admin-gateway/") => allowed("admin-token"),
        ("GET", p) if p.starts_with("/api/attorney-portal/") => allowed("atty-token"),
        ("GET", p) if p.starts_with("/api/dashboard") => allowed("sub-token"),
        (
            "GET",
            "/api/profile" | "/api/letters" | "/api/letters/ltr_1" | "/api/subscription",
        ) => allowed("sub-token"),
        _ => json_response(StatusCode::NOT_FOUND, json!({"error": "Not found"})),
    }
}

async fn spawn_backend() -> (String, SeenLog) {
    let seen = SeenLog::default();
    let app = Router::new().fallback(backend).with_state(Arc::clone(&seen));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), seen)
}

fn suite_for(base_url: &str, timeout_ms: u64) -> SmokeSuite<ReqwestHttpClient> {
    let config = SuiteConfig::default()
        .with_base_url(base_url)
        .with_timeout_ms(timeout_ms);
    let client = Arc::new(ReqwestHttpClient::new(&config).unwrap());
    SmokeSuite::new(
        client,
        config,
        Box::new(ConsoleReporter::new(std::io::sink())),
        Arc::new(SystemClock::new()),
    )
}

#[tokio::test]
async fn test_partially_broken_deployment() {
    let (base_url, seen) = spawn_backend().await;
    let mut suite = suite_for(&base_url, 5_000);

    let summary = suite.run().await;
    let results = &summary.results;

    assert_eq!(results.total(), 24);
    assert_eq!(results.passed(), 21);
    assert_eq!(results.failed(), 3);
    assert_eq!(results.skipped(), &[Phase::Employee]);
    assert_eq!(
        results.failures(),
        &[
            "Detailed Health Check: expected HTTP 200, got 503 Service Unavailable".to_string(),
            "Employee Login: Response: Invalid credentials (expected HTTP 200, got 401 Unauthorized)"
                .to_string(),
            "Commission Management: expected HTTP 200, got 500 Internal Server Error".to_string(),
        ]
    );
    assert_eq!(summary.exit_code(), 1);

    let seen = seen.lock().unwrap().clone();
    let dashboard = seen.iter().find(|s| s.path == "/api/dashboard").unwrap();
    assert_eq!(dashboard.authorization.as_deref(), Some("Bearer sub-token"));
    assert!(seen.iter().all(|s| {
        s.user_agent.as_deref() == Some("TalkToMyLawyer-APITester/1.0")
            && s.content_type
                .as_deref()
                .is_some_and(|ct| ct.starts_with("application/json"))
    }));
    assert!(
        seen.iter()
            .any(|s| s.method == Method::GET && s.path == "/api/letters/ltr_1")
    );
    assert!(!seen.iter().any(|s| s.path == "/api/dashboard/commissions"));
}

#[tokio::test]
async fn test_same_backend_same_pattern() {
    let (base_url, _) = spawn_backend().await;
    let mut suite = suite_for(&base_url, 5_000);

    let first = suite.run().await;
    let second = suite.run().await;

    assert_eq!(first.results, second.results);
}

#[tokio::test]
async fn test_unreachable_backend_fails_without_aborting() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut suite = suite_for(&format!("http://127.0.0.1:{port}"), 2_000);

    let summary = suite.run().await;
    let results = &summary.results;

    // health, logins and payment run; every role phase is skipped
    assert_eq!(results.total(), 8);
    assert_eq!(results.failed(), 8);
    assert_eq!(results.skipped().len(), 5);
    assert_eq!(results.unexpected_errors(), 0);
    assert!(results.failures()[0].starts_with("Health Check: Status: unknown ("));
    assert_eq!(summary.exit_code(), 1);
}
