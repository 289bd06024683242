use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::instrument;

/// The report could not be written. Fatal to the run.
#[derive(Error, Debug)]
#[error("failed to write report to {}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Writes `text` to `path`, replacing any existing file. Returns the bytes written.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_report(path: &Path, text: &str) -> Result<u64, WriteError> {
    let wrap = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(text.as_bytes()).map_err(wrap)?;
    file.flush().map_err(wrap)?;

    Ok(text.len() as u64)
}
