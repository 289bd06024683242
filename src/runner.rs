use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::extractor;
use crate::report::{Report, ReportHeader, ReportSection, WriteError, write_report};
use crate::source;

/// Counters for one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Documents that produced a report section.
    pub processed: usize,
    /// Documents skipped on read or parse failure.
    pub skipped: usize,
    /// Documents read fine but without any accepted entry.
    pub empty: usize,
    pub total_entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub stats: RunStats,
    pub lines: usize,
    pub bytes_written: u64,
}

/// Extracts every configured document into a report. Documents that fail to load or
/// parse are logged and left out.
pub fn build_report(config: &Config, generated_at: DateTime<Utc>) -> (Report, RunStats) {
    let mode = config.mode();
    let mut report = Report::new(ReportHeader {
        title: config.report_title().to_string(),
        generated_at,
        document_count: config.documents().len(),
    });
    let mut stats = RunStats::default();

    for path in config.documents() {
        let document = match source::load(path, config.concepts()) {
            Ok(document) => document,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    unavailable = err.is_unavailable(),
                    "skipping document"
                );
                stats.skipped += 1;
                continue;
            }
        };

        info!(source = %document.source_id, concept = %document.concept, "processing document");

        let entries = match extractor::extract(&document, mode) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(source = %document.source_id, error = %err, "skipping document");
                stats.skipped += 1;
                continue;
            }
        };

        let section = ReportSection::build(&document, entries, mode);
        let count = section.len();
        let bytes = section.byte_len();
        if report.push(section) {
            info!(source = %document.source_id, entries = count, bytes, "entries extracted");
            stats.processed += 1;
            stats.total_entries += count;
        } else {
            warn!(source = %document.source_id, "no Chinese content found");
            stats.empty += 1;
        }
    }

    (report, stats)
}

/// Builds the report and writes it to the configured output path.
#[instrument(skip_all, fields(mode = ?config.mode(), documents = config.documents().len()))]
pub fn run(config: &Config, generated_at: DateTime<Utc>) -> Result<RunSummary, WriteError> {
    let (report, stats) = build_report(config, generated_at);
    let lines = report.lines();
    let bytes_written = write_report(config.output_path(), &lines.join("\n"))?;

    info!(
        output = %config.output_path().display(),
        processed = stats.processed,
        documents = config.documents().len(),
        total_entries = stats.total_entries,
        lines = lines.len(),
        bytes = bytes_written,
        kib = %format!("{:.1}", bytes_written as f64 / 1024.0),
        "report written"
    );

    Ok(RunSummary {
        output_path: config.output_path().to_path_buf(),
        stats,
        lines: lines.len(),
        bytes_written,
    })
}
