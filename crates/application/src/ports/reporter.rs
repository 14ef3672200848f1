//! Reporter port

use chrono::{DateTime, Utc};
use ttml_smoke_domain::{CheckOutcome, Phase, Role, RunSummary};

/// Receives progress of a run as it happens.
///
/// The console implementation prints each event; tests record them.
pub trait Reporter: Send {
    /// The run is about to start.
    fn run_started(&mut self, base_url: &str, at: DateTime<Utc>);

    /// A phase is about to issue its checks.
    fn phase_started(&mut self, phase: Phase);

    /// Login of one role is about to be attempted.
    fn login_started(&mut self, role: Role);

    /// A check finished.
    fn check_recorded(&mut self, outcome: &CheckOutcome);

    /// A phase was skipped.
    fn phase_skipped(&mut self, phase: Phase, reason: &str);

    /// The run was interrupted before all phases finished.
    fn interrupted(&mut self);

    /// An unexpected error aborted the remaining phases.
    fn unexpected_error(&mut self, message: &str);

    /// The run is over; print the summary.
    fn run_finished(&mut self, summary: &RunSummary);
}
