use anyhow::{Context, Result};
use chrono::Utc;
use glean::{config::Config, runner};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::pure_chinese();
    config.validate().context("invalid configuration")?;

    let summary = runner::run(&config, Utc::now())?;
    println!(
        "{}: {} entries from {}/{} documents",
        summary.output_path.display(),
        summary.stats.total_entries,
        summary.stats.processed,
        config.documents().len()
    );
    Ok(())
}
