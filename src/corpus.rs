use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, SearchError};

const BYTE_ORDER_MARK: &str = "\u{feff}";

/// A corpus document, named after the file it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Reads every regular file directly under `dir` as a document.
///
/// Files are visited in file-name order and subdirectories are skipped.
/// Any file that cannot be read, is not UTF-8 or has a non-UTF-8 name
/// aborts the whole load.
pub fn load_corpus(dir: &Path) -> Result<Vec<Document>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| SearchError::io(dir, e))? {
        let entry = entry.map_err(|e| SearchError::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            debug!("skipping subdirectory {}", path.display());
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => return Err(SearchError::Name { path }),
        };
        entries.push((name, path));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut documents = Vec::with_capacity(entries.len());
    for (name, path) in entries {
        let bytes = fs::read(&path).map_err(|e| SearchError::io(&path, e))?;
        let text = decode(&bytes).ok_or_else(|| SearchError::Decode { path: path.clone() })?;
        documents.push(Document::new(name, text));
    }

    info!("loaded {} documents from {}", documents.len(), dir.display());
    if tracing::enabled!(tracing::Level::DEBUG) {
        debug!(
            "corpus: {}",
            serde_json::to_string(&documents).unwrap_or_default()
        );
    }
    Ok(documents)
}

/// UTF-8 decode tolerating a leading BOM, then strip trailing periods.
fn decode(bytes: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(bytes).ok()?;
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    Some(text.trim_end_matches('.').to_string())
}
