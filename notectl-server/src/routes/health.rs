//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub notes: usize,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        notes: state.store().len().await,
    })
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notectl_core::{MemoryStore, NoteFields, NoteStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn health_reports_note_count() {
        let store = Arc::new(MemoryStore::new());
        store.create(NoteFields::new("a", "")).await;

        let Json(body) = health(State(AppState::new(store))).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.notes, 1);
    }
}
