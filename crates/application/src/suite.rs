//! The smoke suite runner.
//!
//! Runs every [`Phase`] in order against one base URL, one request at a time,
//! and tallies an outcome per check. Transport failures and unexpected status
//! codes fail the check and the run moves on; only a [`SuiteError`] stops the
//! remaining phases. Either way the summary is reported.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, error, info, warn};
use ttml_smoke_domain::{
    CheckOutcome, CheckRequest, Phase, ResponseSpec, Role, RunSummary, TestResults,
};

use crate::auth::TokenStore;
use crate::catalog::{
    ADMIN_CHECKS, ATTORNEY_ADMIN_CHECKS, ATTORNEY_DENIED_CHECKS, DETAILED_HEALTH_CHECK,
    EMPLOYEE_CHECKS, EndpointCheck, FORBIDDEN, HEALTH_CHECK, LETTER_GENERATE_PATH, LETTERS_PATH,
    LetterDraft, PAYMENT_CHECKS, SUBSCRIBER_CHECKS, SUBSCRIPTION_CHECK, letter_path,
};
use crate::config::SuiteConfig;
use crate::error::{SuiteError, SuiteResult};
use crate::ports::{Clock, HttpClient, HttpClientError, Reporter};

/// What one check sent and got back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// Status the check passes on.
    pub expected_status: u16,
    /// The response, or the transport error.
    pub result: Result<ResponseSpec, HttpClientError>,
}

impl Exchange {
    /// True when a response arrived with the expected status.
    #[must_use]
    pub fn passed(&self) -> bool {
        matches!(&self.result, Ok(response) if response.status == self.expected_status)
    }

    /// The response, whatever its status.
    #[must_use]
    pub fn response(&self) -> Option<&ResponseSpec> {
        self.result.as_ref().ok()
    }

    /// The response, only if the check passed.
    #[must_use]
    pub fn passed_response(&self) -> Option<&ResponseSpec> {
        self.response().filter(|_| self.passed())
    }

    /// Why the check failed, `None` if it passed.
    #[must_use]
    pub fn failure_reason(&self) -> Option<String> {
        match &self.result {
            Ok(response) if response.status == self.expected_status => None,
            Ok(response) => Some(format!(
                "expected HTTP {}, got {}",
                self.expected_status,
                response.status_line()
            )),
            Err(err) => Some(err.to_string()),
        }
    }

    /// Builds the outcome of a check named `name`.
    ///
    /// A failure reason is appended to the detail in parentheses.
    #[must_use]
    pub fn outcome(&self, name: &str, detail: Option<String>) -> CheckOutcome {
        let detail = match (detail, self.failure_reason()) {
            (detail, None) => detail,
            (Some(detail), Some(reason)) => Some(format!("{detail} ({reason})")),
            (None, Some(reason)) => Some(reason),
        };
        CheckOutcome {
            name: name.to_string(),
            passed: self.passed(),
            detail,
        }
    }
}

/// Sequential checklist runner for the four roles.
pub struct SmokeSuite<C: HttpClient> {
    client: Arc<C>,
    config: SuiteConfig,
    reporter: Box<dyn Reporter>,
    clock: Arc<dyn Clock>,
    tokens: TokenStore,
    results: TestResults,
}

impl<C: HttpClient> SmokeSuite<C> {
    /// Creates a suite that sends through `client` and reports to `reporter`.
    pub fn new(
        client: Arc<C>,
        config: SuiteConfig,
        reporter: Box<dyn Reporter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client,
            config,
            reporter,
            clock,
            tokens: TokenStore::new(),
            results: TestResults::new(),
        }
    }

    /// Configuration of this suite.
    #[must_use]
    pub const fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Tally of the current or last run.
    #[must_use]
    pub const fn results(&self) -> &TestResults {
        &self.results
    }

    /// Tokens captured by the current or last run.
    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Runs every phase and reports the summary.
    pub async fn run(&mut self) -> RunSummary {
        self.run_until(std::future::pending()).await
    }

    /// Runs every phase until done or until `interrupt` resolves, then
    /// reports the summary of whatever was collected.
    pub async fn run_until<F>(&mut self, interrupt: F) -> RunSummary
    where
        F: Future<Output = ()>,
    {
        self.tokens.clear();
        self.results = TestResults::new();

        let started_at = self.clock.now();
        info!(base_url = %self.config.base_url, "starting smoke suite");
        self.reporter.run_started(&self.config.base_url, started_at);

        let interrupted = tokio::select! {
            biased;
            () = interrupt => true,
            () = self.run_phases() => false,
        };
        if interrupted {
            warn!(checks = self.results.total(), "run interrupted");
            self.reporter.interrupted();
        }

        let summary = RunSummary {
            results: self.results.clone(),
            started_at,
            completed_at: self.clock.now(),
            interrupted,
        };
        info!(
            total = summary.results.total(),
            passed = summary.results.passed(),
            failed = summary.results.failed(),
            "smoke suite finished"
        );
        self.reporter.run_finished(&summary);
        summary
    }

    async fn run_phases(&mut self) {
        for phase in Phase::ALL {
            self.reporter.phase_started(phase);
            if let Err(err) = self.run_phase(phase).await {
                let message = err.to_string();
                error!(phase = phase.label(), error = %message, "phase aborted");
                self.reporter.unexpected_error(&message);
                self.results.record_unexpected(&message);
                return;
            }
        }
    }

    async fn run_phase(&mut self, phase: Phase) -> SuiteResult<()> {
        if let Some(role) = phase.required_role()
            && !self.tokens.contains(role)
        {
            info!(phase = phase.label(), role = role.key(), "no token, skipping phase");
            self.results.record_skip(phase);
            self.reporter.phase_skipped(phase, "no valid token");
            return Ok(());
        }

        debug!(phase = phase.label(), "phase started");
        match phase {
            Phase::Health => self.health_phase().await,
            Phase::Authentication => self.authentication_phase().await,
            Phase::Subscriber => self.subscriber_phase().await,
            Phase::Employee => self.role_phase(Role::Employee, &EMPLOYEE_CHECKS).await,
            Phase::Admin => self.role_phase(Role::SuperAdmin, &ADMIN_CHECKS).await,
            Phase::AttorneyAdmin => {
                self.role_phase(Role::AttorneyAdmin, &ATTORNEY_ADMIN_CHECKS)
                    .await
            }
            Phase::Payment => self.public_phase(&PAYMENT_CHECKS).await,
            Phase::AccessControl => self.access_control_phase().await,
        }
    }

    async fn health_phase(&mut self) -> SuiteResult<()> {
        let exchange = self.send(&CheckRequest::get(HEALTH_CHECK.path)).await?;
        let status = exchange
            .response()
            .and_then(|r| r.str_field("status"))
            .unwrap_or_else(|| "unknown".to_string());
        self.record(exchange.outcome(HEALTH_CHECK.name, Some(format!("Status: {status}"))));

        self.check(
            DETAILED_HEALTH_CHECK.name,
            &CheckRequest::get(DETAILED_HEALTH_CHECK.path),
        )
        .await?;
        Ok(())
    }

    async fn authentication_phase(&mut self) -> SuiteResult<()> {
        for role in Role::ALL {
            let account = self
                .config
                .account(role)
                .cloned()
                .ok_or_else(|| SuiteError::MissingAccount(role.key().to_string()))?;
            self.reporter.login_started(role);

            let body = serde_json::to_value(account.login_request())?;
            let exchange = self
                .send(&CheckRequest::post(&account.login_path, body))
                .await?;
            let message = exchange
                .response()
                .and_then(|r| r.str_field("message").or_else(|| r.str_field("error")))
                .unwrap_or_else(|| "No message".to_string());
            self.record(exchange.outcome(
                &format!("{} Login", role.display_name()),
                Some(format!("Response: {message}")),
            ));

            if let Some(token) = exchange.passed_response().and_then(|r| r.str_field("token")) {
                if self.tokens.store(role, token) {
                    info!(role = role.key(), "token captured");
                } else {
                    warn!(role = role.key(), "login returned a blank token");
                }
            } else if exchange.passed() {
                warn!(role = role.key(), "login succeeded without a token");
            }
        }
        Ok(())
    }

    async fn subscriber_phase(&mut self) -> SuiteResult<()> {
        let token = self.token(Role::Subscriber);
        let bearer = token.as_deref();

        for endpoint in SUBSCRIBER_CHECKS {
            self.check(endpoint.name, &CheckRequest::get(endpoint.path).with_bearer(bearer))
                .await?;
        }

        let draft = serde_json::to_value(LetterDraft::default())?;
        let generated = self
            .check(
                "Letter Generation",
                &CheckRequest::post(LETTER_GENERATE_PATH, draft).with_bearer(bearer),
            )
            .await?;

        if let Some(letter_id) = generated
            .passed_response()
            .and_then(|r| r.id_field("letter_id"))
        {
            self.check(
                "Letter Retrieval",
                &CheckRequest::get(letter_path(&letter_id)).with_bearer(bearer),
            )
            .await?;
            self.check("Letters List", &CheckRequest::get(LETTERS_PATH).with_bearer(bearer))
                .await?;
        } else {
            debug!("no letter_id returned, skipping letter follow-ups");
        }

        self.check(
            SUBSCRIPTION_CHECK.name,
            &CheckRequest::get(SUBSCRIPTION_CHECK.path).with_bearer(bearer),
        )
        .await?;
        Ok(())
    }

    async fn role_phase(&mut self, role: Role, endpoints: &[EndpointCheck]) -> SuiteResult<()> {
        let token = self.token(role);
        for endpoint in endpoints {
            let request = CheckRequest::get(endpoint.path).with_bearer(token.as_deref());
            self.check(endpoint.name, &request).await?;
        }
        Ok(())
    }

    async fn public_phase(&mut self, endpoints: &[EndpointCheck]) -> SuiteResult<()> {
        for endpoint in endpoints {
            self.check(endpoint.name, &CheckRequest::get(endpoint.path))
                .await?;
        }
        Ok(())
    }

    async fn access_control_phase(&mut self) -> SuiteResult<()> {
        let token = self.token(Role::AttorneyAdmin);
        for endpoint in ATTORNEY_DENIED_CHECKS {
            let request = CheckRequest::get(endpoint.path)
                .with_bearer(token.as_deref())
                .expect_status(FORBIDDEN);
            self.check(endpoint.name, &request).await?;
        }
        Ok(())
    }

    fn token(&self, role: Role) -> Option<String> {
        self.tokens.get(role).map(ToString::to_string)
    }

    async fn send(&self, request: &CheckRequest) -> SuiteResult<Exchange> {
        let spec = request.resolve(&self.config.base_url, self.config.timeout_ms)?;
        debug!(method = %spec.method, url = %spec.url, "sending request");

        let result = self.client.execute(&spec).await;
        match &result {
            Ok(response) => debug!(
                status = response.status,
                elapsed = ?response.duration,
                "response received"
            ),
            Err(err) => info!(url = %spec.url, error = %err, "request failed"),
        }

        Ok(Exchange {
            expected_status: request.expected_status,
            result,
        })
    }

    async fn check(&mut self, name: &str, request: &CheckRequest) -> SuiteResult<Exchange> {
        let exchange = self.send(request).await?;
        self.record(exchange.outcome(name, None));
        Ok(exchange)
    }

    fn record(&mut self, outcome: CheckOutcome) {
        debug!(check = %outcome.name, passed = outcome.passed, "check recorded");
        self.results.record(&outcome);
        self.reporter.check_recorded(&outcome);
    }
}
