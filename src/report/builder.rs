use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

use crate::extractor::ExtractionMode;
use crate::source::Document;

const REPORT_BANNER_WIDTH: usize = 80;
const SECTION_BANNER_WIDTH: usize = 60;
const SECTION_RULE_WIDTH: usize = 40;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// One numbered line of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// 1-based rank inside the section.
    pub index: usize,
    pub text: String,
}

impl Display for ReportEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}. {}", self.index, self.text)
    }
}

/// Entries accepted from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub concept: String,
    pub source_id: String,
    pub count_label: &'static str,
    pub entries: Vec<ReportEntry>,
}

impl ReportSection {
    /// Numbers `texts` in order, keeping only the first occurrence of each text.
    pub fn build(
        document: &Document,
        texts: impl IntoIterator<Item = String>,
        mode: ExtractionMode,
    ) -> Self {
        let mut seen = HashSet::new();
        let entries = texts
            .into_iter()
            .filter(|text| seen.insert(text.clone()))
            .enumerate()
            .map(|(i, text)| ReportEntry { index: i + 1, text })
            .collect();

        Self {
            concept: document.concept.clone(),
            source_id: document.source_id.clone(),
            count_label: mode.count_label(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            "=".repeat(SECTION_BANNER_WIDTH),
            format!("📚 {}", self.concept),
            "=".repeat(SECTION_BANNER_WIDTH),
            format!("文件: {}", self.source_id),
            format!("{}: {}", self.count_label, self.entries.len()),
            "-".repeat(SECTION_RULE_WIDTH),
            String::new(),
        ];
        for entry in &self.entries {
            lines.push(entry.to_string());
            lines.push(String::new());
        }
        lines
    }

    /// Size of the section once rendered, newlines included.
    pub fn byte_len(&self) -> usize {
        self.lines().iter().map(|line| line.len() + 1).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    /// Number of configured documents, processed or not.
    pub document_count: usize,
}

impl ReportHeader {
    pub fn lines(&self) -> Vec<String> {
        vec![
            "=".repeat(REPORT_BANNER_WIDTH),
            self.title.clone(),
            "=".repeat(REPORT_BANNER_WIDTH),
            format!("提取时间: {}", self.generated_at.format(TIMESTAMP_FORMAT)),
            format!("总文件数: {}", self.document_count),
            "=".repeat(REPORT_BANNER_WIDTH),
            String::new(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub header: ReportHeader,
    pub sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(header: ReportHeader) -> Self {
        Self {
            header,
            sections: Vec::new(),
        }
    }

    /// Adds a section; empty sections are not reported.
    pub fn push(&mut self, section: ReportSection) -> bool {
        if section.is_empty() {
            return false;
        }
        self.sections.push(section);
        true
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(ReportSection::len).sum()
    }

    pub fn lines(&self) -> Vec<String> {
        let lines = self
            .header
            .lines()
            .into_iter()
            .chain(self.sections.iter().flat_map(ReportSection::lines));
        collapse_blank_lines(lines)
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

/// Replaces every run of blank lines with a single empty line.
pub fn collapse_blank_lines(lines: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut collapsed = Vec::new();
    let mut prev_blank = false;
    for line in lines {
        let blank = line.trim().is_empty();
        if blank && prev_blank {
            continue;
        }
        collapsed.push(if blank { String::new() } else { line });
        prev_blank = blank;
    }
    collapsed
}
