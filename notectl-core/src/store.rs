//! Note storage
//!
//! `NoteStore` is the operation contract the HTTP layer talks to.
//! `MemoryStore` keeps notes in process memory:
//! - ids come from a monotonic counter starting at 1 and are never reused
//! - `list` returns notes in creation order
//! - `update` overwrites title and content and re-stamps `lastModified`
//! - `delete` of an absent id is a no-op

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::note::{Note, NoteFields, NoteId};

/// Storage contract for notes
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes in creation order
    async fn list(&self) -> Vec<Note>;

    /// A single note, or `None` if the id is not held
    async fn get(&self, id: NoteId) -> Option<Note>;

    /// Allocate the next id, stamp the note, and store it
    async fn create(&self, fields: NoteFields) -> Note;

    /// Overwrite title and content of an existing note.
    ///
    /// Fails with [`StoreError::NotFound`] without touching the store when
    /// the id is absent.
    async fn update(&self, id: NoteId, fields: NoteFields) -> Result<Note, StoreError>;

    /// Remove a note. Returns whether anything was removed; absent ids are
    /// not an error.
    async fn delete(&self, id: NoteId) -> bool;

    /// Number of notes currently held
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// In-process note store
pub struct MemoryStore {
    // Ids are allocated in increasing order, so key order is creation order.
    notes: RwLock<BTreeMap<NoteId, Note>>,
    next_id: AtomicU64,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            notes: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
            clock,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn list(&self) -> Vec<Note> {
        self.notes.read().await.values().cloned().collect()
    }

    async fn get(&self, id: NoteId) -> Option<Note> {
        self.notes.read().await.get(&id).cloned()
    }

    async fn create(&self, fields: NoteFields) -> Note {
        let mut notes = self.notes.write().await;

        let id = NoteId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let note = Note {
            id,
            title: fields.title,
            content: fields.content,
            last_modified: self.clock.now(),
        };
        notes.insert(id, note.clone());

        tracing::debug!(note_id = %id, "stored new note");
        note
    }

    async fn update(&self, id: NoteId, fields: NoteFields) -> Result<Note, StoreError> {
        let mut notes = self.notes.write().await;
        let note = notes.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        // Never step backwards if the wall clock regresses
        let stamp = self.clock.now().max(note.last_modified);

        note.title = fields.title;
        note.content = fields.content;
        note.last_modified = stamp;

        tracing::debug!(note_id = %id, "updated note");
        Ok(note.clone())
    }

    async fn delete(&self, id: NoteId) -> bool {
        let removed = self.notes.write().await.remove(&id).is_some();
        tracing::debug!(note_id = %id, removed, "delete note");
        removed
    }

    async fn len(&self) -> usize {
        self.notes.read().await.len()
    }
}
