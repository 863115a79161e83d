//! Local draft cache
//!
//! Holds a single unsaved `{title, content}` pair on disk for work that is
//! not yet associated with a note id. Independent of the note store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FileError, FileResult};
use crate::note::NoteFields;

/// Title given to a fresh draft
pub const DEFAULT_DRAFT_TITLE: &str = "Untitled Note";

/// Unsaved note text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: DEFAULT_DRAFT_TITLE.to_string(),
            content: String::new(),
        }
    }
}

impl From<Draft> for NoteFields {
    fn from(d: Draft) -> Self {
        NoteFields::new(d.title, d.content)
    }
}

/// JSON file holding the current draft
#[derive(Debug, Clone)]
pub struct DraftCache {
    path: PathBuf,
}

impl DraftCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the draft, `None` if none has been saved
    pub fn load(&self) -> FileResult<Option<Draft>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(FileError::io(&self.path, e)),
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| FileError::CorruptDraft {
                path: self.path.clone(),
                source,
            })
    }

    pub fn save(&self, draft: &Draft) -> FileResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| FileError::io(parent, e))?;
        }

        let body = serde_json::to_string_pretty(draft).map_err(|source| FileError::Serialize {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, body).map_err(|e| FileError::io(&self.path, e))
    }

    /// Remove the draft file if present
    pub fn clear(&self) -> FileResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FileError::io(&self.path, e)),
        }
    }
}
