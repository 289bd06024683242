use std::path::{Path, PathBuf};

/// A loaded source page. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name, used in the report and in logs.
    pub source_id: String,
    pub path: PathBuf,
    /// Human-readable concept label.
    pub concept: String,
    pub markup: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, concept: impl Into<String>, markup: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            source_id: source_id(&path),
            path,
            concept: concept.into(),
            markup: markup.into(),
        }
    }
}

pub fn source_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_id_is_file_name() {
        let doc = Document::new("resource/煤气灯效应 - 维基百科.html", "煤气灯效应", "<p></p>");
        assert_eq!(doc.source_id, "煤气灯效应 - 维基百科.html");
        assert_eq!(source_id(Path::new("page.html")), "page.html");
    }
}
