pub mod cleaner;
pub mod language;
pub mod model;
pub mod reader;
pub mod reject;

#[cfg(test)]
mod tests;

pub use cleaner::clean;
pub use language::is_chinese;
pub use model::{ExtractionMode, Segment, SegmentKind};
pub use reject::{Purity, is_meaningful};

use tracing::debug;

use crate::source::{Document, SourceError};

const TITLE_PREFIX: &str = "【标题】";

/// Runs a document through locate -> segment -> classify -> clean and returns the
/// accepted entries in document order. Duplicates are left for the report to drop.
pub fn extract(document: &Document, mode: ExtractionMode) -> Result<Vec<String>, SourceError> {
    // 1. Parse and find the main content
    let html = reader::parse(document)?;
    let region = reader::locate(&html);
    debug!(
        source = %document.source_id,
        region = region.selector.unwrap_or("document"),
        "content region located"
    );

    let mut entries = Vec::new();

    // 2. Page title comes first
    if let Some(title) = reader::title(&html)
        && let Some(text) = accept_title(&title.text, mode)
    {
        entries.push(format!("{TITLE_PREFIX}{text}"));
    }

    // 3. Block-level content
    for segment in reader::segments(region) {
        match mode {
            ExtractionMode::Chinese => entries.extend(accept_node(&segment.text, mode)),
            ExtractionMode::PureChinese => entries.extend(accept_sentences(&segment.text, mode)),
        }
    }

    debug!(source = %document.source_id, entries = entries.len(), "segments accepted");
    Ok(entries)
}

fn accept_title(title: &str, mode: ExtractionMode) -> Option<String> {
    let candidate = match mode {
        ExtractionMode::Chinese => title,
        ExtractionMode::PureChinese => reader::title_head(title),
    };
    if !is_meaningful(candidate, mode.purity()) {
        return None;
    }
    clean(candidate)
}

fn accept_node(text: &str, mode: ExtractionMode) -> Option<String> {
    if !is_meaningful(text, mode.purity()) {
        return None;
    }
    clean(text).filter(|entry| long_enough(entry, mode))
}

/// A node can mix acceptable and unacceptable sentences, so each one is judged alone.
fn accept_sentences(text: &str, mode: ExtractionMode) -> Vec<String> {
    if !language::contains_chinese(text) {
        return Vec::new();
    }

    reader::sentences(text)
        .filter(|sentence| is_meaningful(sentence, mode.purity()))
        .filter_map(cleaner::tidy_sentence)
        .filter(|entry| long_enough(entry, mode))
        .collect()
}

fn long_enough(entry: &str, mode: ExtractionMode) -> bool {
    entry.chars().count() > mode.min_entry_chars()
}
