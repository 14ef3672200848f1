//! Check outcomes and the running tally of a suite run.

use crate::phase::Phase;

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Check name, e.g. "Subscriber Dashboard".
    pub name: String,
    /// Whether the observed status matched the expected one.
    pub passed: bool,
    /// Extra text printed under the check.
    pub detail: Option<String>,
}

impl CheckOutcome {
    /// Creates a passed outcome.
    #[must_use]
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            detail: None,
        }
    }

    /// Creates a failed outcome with a reason.
    #[must_use]
    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            detail: Some(detail.into()),
        }
    }

    /// Sets the detail.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Returns `name: detail`, or just the name when there is no detail.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}: {}", self.name, detail),
            None => self.name.clone(),
        }
    }
}

/// Running totals of a suite run.
///
/// Counters only change through [`TestResults::record`], so
/// `total == passed + failed` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestResults {
    total: usize,
    passed: usize,
    failed: usize,
    failures: Vec<String>,
    skipped: Vec<Phase>,
    unexpected_errors: usize,
}

impl TestResults {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one check outcome.
    pub fn record(&mut self, outcome: &CheckOutcome) {
        self.total += 1;
        if outcome.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
            self.failures.push(outcome.description());
        }
    }

    /// Records a phase skipped for lack of a token.
    pub fn record_skip(&mut self, phase: Phase) {
        self.skipped.push(phase);
    }

    /// Records an error that aborted the run. Not counted as a check.
    pub fn record_unexpected(&mut self, message: &str) {
        self.unexpected_errors += 1;
        self.failures.push(format!("Unexpected error: {message}"));
    }

    /// Number of checks recorded.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of passed checks.
    #[must_use]
    pub const fn passed(&self) -> usize {
        self.passed
    }

    /// Number of failed checks.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Failure descriptions in encounter order.
    #[must_use]
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Phases skipped for lack of a token.
    #[must_use]
    pub fn skipped(&self) -> &[Phase] {
        &self.skipped
    }

    /// Number of errors that aborted the run.
    #[must_use]
    pub const fn unexpected_errors(&self) -> usize {
        self.unexpected_errors
    }

    /// Check if no check failed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Pass rate as a percentage, `None` when nothing ran.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| (self.passed as f64 / self.total as f64) * 100.0)
    }
}
