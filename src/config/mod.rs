//! Configuration for the extraction and cleanup runs.
//!
//! Runs take no flags or environment variables: each binary starts from one of the fixed
//! configurations below (`Config::pure_chinese`, `Config::chinese`,
//! `CleanupConfig::default`). Tests and embedders build their own with `Config::new`.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::extractor::ExtractionMode;

/// Label used when no concept key occurs in a source path.
pub const UNKNOWN_CONCEPT: &str = "未知概念";

const RESOURCE_FILES: [&str; 5] = [
    "resource/DARVO - 维基百科 ---- Wikipedia (2025_9_21 18：07：57).html",
    "resource/习得性失助 - 维基百科，自由的百科全书 (2025_9_21 18：00：32).html",
    "resource/创伤性结合 - 维基百科 --- Traumatic bonding - Wikipedia (2025_9_21 18：06：55).html",
    "resource/煤气灯效应 - 维基百科，自由的百科全书 (2025_9_21 18：07：39).html",
    "resource/爱情轰炸 - 维基百科 --- Love bombing - Wikipedia (2025_9_21 18：06：27).html",
];

const PURE_CHINESE_OUTPUT: &str = "psychology_concepts_pure_chinese.txt";
const CHINESE_OUTPUT: &str = "psychology_concepts_chinese_content.txt";
const CLEANED_OUTPUT: &str = "psychology_concepts_cleaned.txt";

/// Ordered concept key -> display label mapping; the first key found in a path wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConceptMap {
    entries: Vec<(String, String)>,
}

impl ConceptMap {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, label)| (key.into(), label.into()))
                .collect(),
        }
    }

    pub fn resolve(&self, source: &str) -> &str {
        self.entries
            .iter()
            .find(|(key, _)| source.contains(key.as_str()))
            .map(|(_, label)| label.as_str())
            .unwrap_or(UNKNOWN_CONCEPT)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extraction run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    documents: Vec<PathBuf>,
    output_path: PathBuf,
    mode: ExtractionMode,
    report_title: String,
    concepts: ConceptMap,
}

impl Config {
    pub fn new(
        documents: impl IntoIterator<Item = impl Into<PathBuf>>,
        output_path: impl Into<PathBuf>,
        mode: ExtractionMode,
        report_title: impl Into<String>,
        concepts: ConceptMap,
    ) -> Self {
        Self {
            documents: documents.into_iter().map(Into::into).collect(),
            output_path: output_path.into(),
            mode,
            report_title: report_title.into(),
            concepts,
        }
    }

    /// Strict run over the bundled psychology articles.
    pub fn pure_chinese() -> Self {
        Self::new(
            RESOURCE_FILES,
            PURE_CHINESE_OUTPUT,
            ExtractionMode::PureChinese,
            "心理学概念纯中文内容提取结果",
            ConceptMap::new([
                ("DARVO", "DARVO"),
                ("习得性失助", "习得性失助"),
                ("创伤性结合", "创伤性结合"),
                ("煤气灯效应", "煤气灯效应"),
                ("爱情轰炸", "爱情轰炸"),
            ]),
        )
    }

    /// Lenient run over the same articles; labels carry the English term.
    pub fn chinese() -> Self {
        Self::new(
            RESOURCE_FILES,
            CHINESE_OUTPUT,
            ExtractionMode::Chinese,
            "心理学概念中文内容提取结果",
            ConceptMap::new([
                ("DARVO", "DARVO"),
                ("习得性失助", "习得性失助 (Learned Helplessness)"),
                ("创伤性结合", "创伤性结合 (Traumatic Bonding)"),
                ("煤气灯效应", "煤气灯效应 (Gaslighting)"),
                ("爱情轰炸", "爱情轰炸 (Love Bombing)"),
            ]),
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.documents.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "documents",
                reason: "at least one document is required".to_string(),
            });
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.report_title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "report_title",
                reason: "must not be blank".to_string(),
            });
        }
        Ok(())
    }

    pub fn documents(&self) -> &[PathBuf] {
        &self.documents
    }
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }
    pub fn report_title(&self) -> &str {
        &self.report_title
    }
    pub fn concepts(&self) -> &ConceptMap {
        &self.concepts
    }
}

/// Paths for the standalone report cleanup pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(PURE_CHINESE_OUTPUT),
            output_path: PathBuf::from(CLEANED_OUTPUT),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_configs_are_valid() {
        let pure = Config::pure_chinese();
        assert!(pure.validate().is_ok());
        assert_eq!(pure.documents().len(), 5);
        assert_eq!(pure.mode(), ExtractionMode::PureChinese);
        assert_eq!(pure.output_path(), Path::new(PURE_CHINESE_OUTPUT));

        let lenient = Config::chinese();
        assert!(lenient.validate().is_ok());
        assert_eq!(lenient.mode(), ExtractionMode::Chinese);
        assert_eq!(lenient.concepts().len(), 5);
    }

    #[test]
    fn concept_resolution_by_substring() {
        let config = Config::chinese();
        let concepts = config.concepts();
        assert_eq!(
            concepts.resolve(RESOURCE_FILES[3]),
            "煤气灯效应 (Gaslighting)"
        );
        assert_eq!(concepts.resolve("resource/DARVO.html"), "DARVO");
        assert_eq!(concepts.resolve("resource/other.html"), UNKNOWN_CONCEPT);
    }

    #[test]
    fn concept_resolution_first_key_wins() {
        let concepts = ConceptMap::new([("创伤", "创伤"), ("创伤性结合", "创伤性结合")]);
        assert_eq!(concepts.resolve("创伤性结合.html"), "创伤");
    }

    #[test]
    fn rejects_empty_documents() {
        let config = Config::new(
            Vec::<PathBuf>::new(),
            "out.txt",
            ExtractionMode::Chinese,
            "标题",
            ConceptMap::default(),
        );
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for 'documents': at least one document is required"
        );
    }

    #[test]
    fn rejects_empty_output_path() {
        let config = Config::new(
            ["a.html"],
            "",
            ExtractionMode::Chinese,
            "标题",
            ConceptMap::default(),
        );
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "output_path",
                ..
            })
        ));
    }

    #[test]
    fn cleanup_defaults_read_strict_report() {
        let cleanup = CleanupConfig::default();
        assert_eq!(cleanup.input_path, PathBuf::from(PURE_CHINESE_OUTPUT));
        assert_eq!(cleanup.output_path, PathBuf::from(CLEANED_OUTPUT));
    }
}
