//! `kontur` binary: batch spreadsheet-to-GeoJSON conversion.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod batch;
mod cli;
mod discover;
mod sink;

use crate::batch::run_batch;
use crate::cli::Cli;

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Cli::parse();

    let report = run_batch(&args)?;
    info!("{report}");
    if report.n_converted == 0 && report.n_failed > 0 {
        anyhow::bail!("all {} document(s) failed", report.n_failed);
    }
    Ok(())
}
