//! Plain-text import and export
//!
//! A note maps to a `.txt` file: the file name (minus `.txt`) is the title
//! and the file body is the content.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FileError, FileResult};
use crate::note::NoteFields;

/// Extension used for exported notes
pub const TEXT_EXTENSION: &str = ".txt";

/// Read a text file into note fields.
///
/// The title is the file name with the first `.txt` removed, so
/// `groceries.txt` becomes `groceries`.
pub fn import_text_file(path: &Path) -> FileResult<NoteFields> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| FileError::NoFileName {
            path: path.to_path_buf(),
        })?;

    let content = fs::read_to_string(path).map_err(|e| FileError::io(path, e))?;
    let title = name.replacen(TEXT_EXTENSION, "", 1);

    tracing::debug!(path = %path.display(), %title, "imported text file");
    Ok(NoteFields { title, content })
}

/// File name a note is exported under.
///
/// Path separators are replaced so the name stays a single component.
pub fn export_file_name(title: &str) -> String {
    let stem = if title.trim().is_empty() {
        "Untitled"
    } else {
        title
    };
    let safe: String = stem
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("{safe}{TEXT_EXTENSION}")
}

/// Write `content` to `dir/{title}.txt`, returning the written path
pub fn export_text_file(dir: &Path, title: &str, content: &str) -> FileResult<PathBuf> {
    let path = dir.join(export_file_name(title));
    fs::write(&path, content).map_err(|e| FileError::io(&path, e))?;

    tracing::debug!(path = %path.display(), "exported note");
    Ok(path)
}
