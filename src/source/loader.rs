use std::fs;
use std::path::Path;
use tracing::instrument;

use crate::config::ConceptMap;
use crate::source::{Document, SourceError, types::source_id};

#[instrument(skip_all, fields(path = %path.display()))]
pub fn load(path: &Path, concepts: &ConceptMap) -> Result<Document, SourceError> {
    let markup = read_text(path)?;
    let id = source_id(path);
    let concept = concepts.resolve(&id).to_string();
    Ok(Document {
        source_id: id,
        path: path.to_path_buf(),
        concept,
        markup,
    })
}

/// Reads a whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    decode_to_utf8(&bytes).ok_or_else(|| SourceError::Decode {
        path: path.to_path_buf(),
    })
}

/// Decodes UTF-8, dropping a leading BOM. Malformed input yields `None`.
fn decode_to_utf8(bytes: &[u8]) -> Option<String> {
    let (decoded, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    (!had_errors).then(|| decoded.into_owned())
}
