//! Application state shared across handlers

use std::sync::Arc;

use notectl_core::NoteStore;

/// Shared application state.
///
/// The store is built once at startup and injected here; handlers hold no
/// note state of their own.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    pub fn store(&self) -> &dyn NoteStore {
        self.inner.store.as_ref()
    }
}
