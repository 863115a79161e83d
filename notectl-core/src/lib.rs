//! notectl-core: note model and storage
//!
//! - [`note`]: the `Note` entity and its wire format
//! - [`store`]: the `NoteStore` contract and the in-memory implementation
//! - [`files`]: `.txt` import and export
//! - [`draft`]: local cache for unsaved work

pub mod clock;
pub mod draft;
pub mod error;
pub mod files;
pub mod note;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use draft::{Draft, DraftCache};
pub use error::{FileError, FileResult, StoreError};
pub use note::{Note, NoteFields, NoteId};
pub use store::{MemoryStore, NoteStore};
