use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::extractor::reject::Purity;

/// Markup element a segment was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    Title,
    Paragraph,
    Heading,
    ListItem,
    Cell,
}

impl SegmentKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "title" => Some(Self::Title),
            "p" => Some(Self::Paragraph),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(Self::Heading),
            "li" => Some(Self::ListItem),
            "td" | "th" => Some(Self::Cell),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Which extraction run is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionMode {
    /// Every node holding some Chinese text.
    Chinese,
    /// Sentence-level extraction of text that reads as Chinese prose only.
    PureChinese,
}

impl ExtractionMode {
    pub fn purity(self) -> Purity {
        match self {
            Self::Chinese => Purity::Lenient,
            Self::PureChinese => Purity::Strict,
        }
    }

    /// Entries must be strictly longer than this many characters.
    pub fn min_entry_chars(self) -> usize {
        match self {
            Self::Chinese => 3,
            Self::PureChinese => 5,
        }
    }

    /// Label of the per-section entry count line.
    pub fn count_label(self) -> &'static str {
        match self {
            Self::Chinese => "提取条目数",
            Self::PureChinese => "纯中文条目数",
        }
    }
}

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        let text = "  Hello    world  \n\n\n  Test  ";
        assert_eq!(normalize_whitespace(text), "Hello world Test");
        assert_eq!(normalize_whitespace("心理\u{3000}学"), "心理 学");
    }

    #[test]
    fn test_segment_kind_from_tag() {
        assert_eq!(SegmentKind::from_tag("h4"), Some(SegmentKind::Heading));
        assert_eq!(SegmentKind::from_tag("th"), Some(SegmentKind::Cell));
        assert_eq!(SegmentKind::from_tag("div"), None);
    }

    #[test]
    fn test_mode_settings() {
        assert_eq!(ExtractionMode::PureChinese.purity(), Purity::Strict);
        assert_eq!(ExtractionMode::Chinese.purity(), Purity::Lenient);
        assert_eq!(ExtractionMode::PureChinese.count_label(), "纯中文条目数");
    }
}
