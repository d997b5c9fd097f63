use std::io;

use actbench::bench;
use actbench::domain::DomainConfig;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // diagnostics go to stderr, stdout carries only the table
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = DomainConfig::default();
    tracing::info!(samples = config.samples, start = config.start, end = config.end, "starting benchmark");

    let stdout = io::stdout();
    bench::run(&config, stdout.lock())?;

    Ok(())
}
