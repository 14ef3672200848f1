//! TTML API smoke suite - entry point
//!
//! Runs every check against the production site and exits with status 0
//! only when no check failed. Ctrl-C stops the run and still prints the
//! summary of what ran.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ttml_smoke_application::{SmokeSuite, SuiteConfig};
use ttml_smoke_infrastructure::{ConsoleReporter, ReqwestHttpClient, SystemClock};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so they never interleave with the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = SuiteConfig::default();
    let client = Arc::new(ReqwestHttpClient::new(&config)?);
    let mut suite = SmokeSuite::new(
        client,
        config,
        Box::new(ConsoleReporter::stdout()),
        Arc::new(SystemClock::new()),
    );

    let summary = suite
        .run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %err, "cannot listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        })
        .await;

    Ok(ExitCode::from(summary.exit_code()))
}
