//! # JSON Loader
//!
//! Scans the direct entries of a config folder and keeps every one whose
//! contents decode as JSON.
//!
//! - One level only; subfolders are not descended into.
//! - Order is whatever the platform's directory listing yields. Nothing is
//!   sorted.
//! - Content that is not JSON (including bytes that are not UTF-8) is
//!   skipped without error.
//! - An entry that cannot be read at all, such as a subfolder, stops the
//!   scan with [`LoadError::ReadEntry`].

use serde_json::Value;

use crate::document::ParsedDocument;
use crate::error::LoadError;
use crate::path::FolderPath;

/// Decode `bytes` as a JSON document, or `None` if they are not one.
pub fn parse_document(bytes: &[u8]) -> Option<Value> {
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::trace!(error = %e, "content is not JSON");
            None
        }
    }
}

/// Whether `bytes` decode as a JSON document.
pub fn is_valid_json(bytes: &[u8]) -> bool {
    parse_document(bytes).is_some()
}

/// Load every JSON document directly inside `folder`.
///
/// `on_entry` is called with each entry name before that entry is read, so
/// callers can echo progress in scan order. Each file is read in full,
/// parsed once, and released before the next entry is visited.
///
/// # Errors
///
/// [`LoadError::ListFolder`] if the folder cannot be listed and
/// [`LoadError::ReadEntry`] for the first entry that cannot be read.
pub fn load_documents<F>(
    folder: &FolderPath,
    mut on_entry: F,
) -> Result<Vec<ParsedDocument>, LoadError>
where
    F: FnMut(&str),
{
    let entries =
        std::fs::read_dir(folder.as_path()).map_err(|source| LoadError::ListFolder {
            path: folder.as_path().to_path_buf(),
            source,
        })?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::ReadEntry {
            path: folder.as_path().to_path_buf(),
            source,
        })?;
        // The lossy name is for display only; reads go through the raw path.
        let name = entry.file_name().to_string_lossy().into_owned();
        on_entry(&name);

        let path = entry.path();
        let bytes = std::fs::read(&path).map_err(|source| LoadError::ReadEntry {
            path: path.clone(),
            source,
        })?;

        match parse_document(&bytes) {
            Some(value) => {
                tracing::debug!(entry = %name, "loaded JSON document");
                documents.push(ParsedDocument::new(name, value));
            }
            None => tracing::debug!(entry = %name, "skipped: not JSON"),
        }
    }

    tracing::info!(
        folder = %folder,
        loaded = documents.len(),
        "config folder scanned"
    );
    Ok(documents)
}
