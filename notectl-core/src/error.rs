/// Structured error types for notectl-core.
///
/// Library consumers get `thiserror` enums they can match on; the
/// `notectl` binary wraps them in `anyhow` for reporting.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::note::NoteId;

/// Errors raised by a [`NoteStore`](crate::store::NoteStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The operation targeted an id the store does not hold
    #[error("Note {0} not found")]
    NotFound(NoteId),
}

/// Errors from text-file import/export and the draft cache
#[derive(Error, Debug)]
pub enum FileError {
    /// I/O operation failed
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Draft file exists but is not valid JSON
    #[error("Corrupt draft file {path:?}: {source}")]
    CorruptDraft {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Draft could not be encoded for writing
    #[error("Failed to serialize draft for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Path has no usable file name to derive a title from
    #[error("Path has no file name: {path:?}")]
    NoFileName { path: PathBuf },
}

impl FileError {
    /// Create an I/O error tagged with the path involved
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for file operations
pub type FileResult<T> = std::result::Result<T, FileError>;
