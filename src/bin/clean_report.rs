use anyhow::{Context, Result};
use glean::{
    config::CleanupConfig,
    report::{clean_report_text, write_report},
    source::read_text,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = CleanupConfig::default();

    let content = read_text(&config.input_path)
        .with_context(|| format!("failed to read report: {}", config.input_path.display()))?;
    let cleaned = clean_report_text(&content);
    let written = write_report(&config.output_path, &cleaned.text)?;

    let original = content.len() as u64;
    let reduced = original.saturating_sub(written);
    let percent = if original == 0 {
        0.0
    } else {
        reduced as f64 / original as f64 * 100.0
    };

    info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        original_lines = cleaned.original_lines,
        cleaned_lines = cleaned.cleaned_lines,
        changed_lines = cleaned.changed_lines,
        original_bytes = original,
        cleaned_bytes = written,
        "report cleaned"
    );
    println!(
        "{}: reduced {} bytes ({:.1}%)",
        config.output_path.display(),
        reduced,
        percent
    );
    Ok(())
}
