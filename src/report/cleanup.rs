use tracing::debug;

use crate::extractor::clean;
use crate::report::collapse_blank_lines;

/// Result of re-cleaning an already written report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedReport {
    pub text: String,
    pub original_lines: usize,
    pub cleaned_lines: usize,
    /// Lines kept but rewritten by the cleaner.
    pub changed_lines: usize,
}

/// Runs every non-blank line of `content` through the artifact cleaner. Blank lines stay
/// as separators, but never two in a row.
pub fn clean_report_text(content: &str) -> CleanedReport {
    let raw_lines: Vec<&str> = content.split('\n').collect();
    let mut changed_lines = 0;

    let kept = raw_lines.iter().filter_map(|line| {
        if line.trim().is_empty() {
            return Some(String::new());
        }
        let cleaned = clean(line)?;
        if cleaned != line.trim() {
            changed_lines += 1;
            debug!(line = %truncate(line.trim(), 50), "cleaned");
        }
        Some(cleaned)
    });
    let lines = collapse_blank_lines(kept);

    CleanedReport {
        text: lines.join("\n"),
        original_lines: raw_lines.len(),
        cleaned_lines: lines.len(),
        changed_lines,
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
