//! Console reporter.
//!
//! Prints progress and the final summary as plain text with status icons.

use std::fmt::Display;
use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use tracing::warn;
use ttml_smoke_application::ports::Reporter;
use ttml_smoke_domain::{CheckOutcome, Phase, Role, RunSummary};

const RULE_WIDTH: usize = 60;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes the human-readable report to any writer (stdout by default).
pub struct ConsoleReporter<W: Write + Send = io::Stdout> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter printing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    /// Reporter printing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) {
        if let Err(err) = writeln!(self.out, "{text}") {
            warn!(error = %err, "failed to write report line");
        }
    }

    fn rule(&mut self) {
        self.line("=".repeat(RULE_WIDTH));
    }
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(TIME_FORMAT).to_string()
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn run_started(&mut self, base_url: &str, at: DateTime<Utc>) {
        self.line("🚀 Starting Talk-To-My-Lawyer API Testing Suite");
        self.line(format_args!("🌐 Testing against: {base_url}"));
        self.line(format_args!("⏰ Started at: {}", local_time(at)));
        self.rule();
    }

    fn phase_started(&mut self, phase: Phase) {
        self.line(format_args!("\n{} Testing {}...", phase.icon(), phase.title()));
    }

    fn login_started(&mut self, role: Role) {
        self.line(format_args!("\n  Testing {role} authentication..."));
    }

    fn check_recorded(&mut self, outcome: &CheckOutcome) {
        let icon = if outcome.passed { "✅" } else { "❌" };
        self.line(format_args!("{icon} {}", outcome.name));
        if let Some(detail) = &outcome.detail {
            self.line(format_args!("   {detail}"));
        }
    }

    fn phase_skipped(&mut self, phase: Phase, reason: &str) {
        self.line(format_args!("⚠️  Skipping {} tests - {reason}", phase.label()));
    }

    fn interrupted(&mut self) {
        self.line("\n⚠️  Testing interrupted by user");
    }

    fn unexpected_error(&mut self, message: &str) {
        self.line(format_args!("\n❌ Unexpected error during testing: {message}"));
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        let results = &summary.results;

        self.line("");
        self.rule();
        self.line("📊 TEST RESULTS SUMMARY");
        self.rule();
        self.line(format_args!("Total Tests: {}", results.total()));
        self.line(format_args!("✅ Passed: {}", results.passed()));
        self.line(format_args!("❌ Failed: {}", results.failed()));
        if let Some(rate) = results.success_rate() {
            self.line(format_args!("📈 Success Rate: {rate:.1}%"));
        }

        if !results.failures().is_empty() {
            self.line("\n🔍 FAILED TESTS:");
            for failure in results.failures() {
                self.line(format_args!("   • {failure}"));
            }
        }

        self.line(format_args!(
            "\n⏰ Completed at: {}",
            local_time(summary.completed_at)
        ));
        if let Err(err) = self.out.flush() {
            warn!(error = %err, "failed to flush report");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use ttml_smoke_domain::TestResults;

    fn render(f: impl FnOnce(&mut ConsoleReporter<Vec<u8>>)) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new());
        f(&mut reporter);
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    fn summary(results: TestResults) -> RunSummary {
        let at = Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        RunSummary {
            results,
            started_at: at,
            completed_at: at,
            interrupted: false,
        }
    }

    #[test]
    fn test_check_lines() {
        let out = render(|r| {
            r.check_recorded(&CheckOutcome::pass("Health Check").with_detail("Status: healthy"));
            r.check_recorded(&CheckOutcome::fail("Profile Settings", "expected HTTP 200, got 500"));
        });
        assert_eq!(
            out,
            "✅ Health Check\n   Status: healthy\n❌ Profile Settings\n   expected HTTP 200, got 500\n"
        );
    }

    #[test]
    fn test_phase_and_skip_lines() {
        let out = render(|r| {
            r.phase_started(Phase::Subscriber);
            r.phase_skipped(Phase::Subscriber, "no valid token");
            r.login_started(Role::AttorneyAdmin);
        });
        assert_eq!(
            out,
            "\n👤 Testing Subscriber Endpoints...\n⚠️  Skipping subscriber tests - no valid token\n\n  Testing attorney_admin authentication...\n"
        );
    }

    #[test]
    fn test_summary_with_failures() {
        let mut results = TestResults::new();
        results.record(&CheckOutcome::pass("Health Check"));
        results.record(&CheckOutcome::pass("Detailed Health Check"));
        results.record(&CheckOutcome::fail("Employee Login", "Response: Invalid credentials"));

        let out = render(|r| r.run_finished(&summary(results)));

        assert!(out.contains("📊 TEST RESULTS SUMMARY\n"));
        assert!(out.contains("Total Tests: 3\n✅ Passed: 2\n❌ Failed: 1\n"));
        assert!(out.contains("📈 Success Rate: 66.7%\n"));
        assert!(out.contains("\n🔍 FAILED TESTS:\n   • Employee Login: Response: Invalid credentials\n"));
        assert!(out.contains("⏰ Completed at: "));
    }

    #[test]
    fn test_summary_of_empty_run_has_no_rate() {
        let out = render(|r| r.run_finished(&summary(TestResults::new())));
        assert!(out.contains("Total Tests: 0"));
        assert!(!out.contains("Success Rate"));
        assert!(!out.contains("FAILED TESTS"));
    }

    #[test]
    fn test_banner() {
        let at = Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        let out = render(|r| r.run_started("https://www.talk-to-my-lawyer.com", at));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "🚀 Starting Talk-To-My-Lawyer API Testing Suite");
        assert_eq!(lines[1], "🌐 Testing against: https://www.talk-to-my-lawyer.com");
        assert!(lines[2].starts_with("⏰ Started at: 2026-03-0"));
        assert_eq!(lines[3], "=".repeat(60));
    }

    #[test]
    fn test_interrupt_and_error_lines() {
        let out = render(|r| {
            r.interrupted();
            r.unexpected_error("boom");
        });
        assert_eq!(
            out,
            "\n⚠️  Testing interrupted by user\n\n❌ Unexpected error during testing: boom\n"
        );
    }
}
