//! Final report of a run.

use chrono::{DateTime, Utc};

use crate::testing::TestResults;

/// Everything printed after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Tally at the time the run stopped.
    pub results: TestResults,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run stopped.
    pub completed_at: DateTime<Utc>,
    /// Whether the run was cut short by an interrupt.
    pub interrupted: bool,
}

impl RunSummary {
    /// True when no check failed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.results.all_passed()
    }

    /// Process exit status: 0 when no check failed, 1 otherwise.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }
}
