//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Driving the fetch with signal-driven cancellation
//! - Human-friendly output formatting

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;
mod signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cmd = cli::Cli::parse();

    let cancel = CancellationToken::new();
    tokio::spawn(signal::listen(cancel.clone()));

    let outcome = cmd.run(cancel).await?;
    tracing::debug!(?outcome, "finished");

    Ok(())
}

// Logs go to stderr; stdout carries only the report.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
