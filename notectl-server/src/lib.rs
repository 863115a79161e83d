//! notectl-server: HTTP layer for notes
//!
//! Exposes a [`NoteStore`](notectl_core::NoteStore) as the `/api/notes`
//! resource collection, validating request bodies and mapping store
//! outcomes to status codes.

pub mod config;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use server::{build_router, run_server};
pub use state::AppState;
