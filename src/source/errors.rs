use std::path::PathBuf;
use thiserror::Error;

/// Failures that cost a single document; the run carries on without it.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("source unavailable: {}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source is not valid utf-8: {}", .path.display())]
    Decode { path: PathBuf },

    #[error("failed to parse {source_id}: {reason}")]
    Parse { source_id: String, reason: String },
}

impl SourceError {
    /// True when the file itself could not be read, as opposed to read but unusable.
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Unavailable { .. } | Self::Decode { .. } => true,
            Self::Parse { .. } => false,
        }
    }
}
