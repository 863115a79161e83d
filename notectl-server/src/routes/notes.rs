//! Note endpoints
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | /api/notes | 200 `Note[]` | |
//! | GET | /api/notes/{id} | 200 `Note` | 404 |
//! | POST | /api/notes | 200 `Note` | 400 |
//! | PUT | /api/notes/{id} | 200 `Note` | 400, 404 |
//! | DELETE | /api/notes/{id} | 204 | |

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::instrument;

use notectl_core::Note;

use crate::error::ApiError;
use crate::extractors::{NoteBody, NotePath};
use crate::state::AppState;

/// GET /api/notes - all notes in creation order
#[instrument(skip_all)]
async fn list_notes(State(state): State<AppState>) -> Json<Vec<Note>> {
    Json(state.store().list().await)
}

/// GET /api/notes/{id}
#[instrument(skip_all, fields(note_id = ?id))]
async fn get_note(
    State(state): State<AppState>,
    NotePath(id): NotePath,
) -> Result<Json<Note>, ApiError> {
    let id = id.ok_or(ApiError::NoteNotFound)?;
    let note = state.store().get(id).await.ok_or(ApiError::NoteNotFound)?;
    Ok(Json(note))
}

/// POST /api/notes - create a note
#[instrument(skip_all)]
async fn create_note(State(state): State<AppState>, NoteBody(fields): NoteBody) -> Json<Note> {
    let note = state.store().create(fields).await;
    tracing::info!(note_id = %note.id, "note created");
    Json(note)
}

/// PUT /api/notes/{id} - replace title and content
#[instrument(skip_all, fields(note_id = ?id))]
async fn update_note(
    State(state): State<AppState>,
    NotePath(id): NotePath,
    NoteBody(fields): NoteBody,
) -> Result<Json<Note>, ApiError> {
    let id = id.ok_or(ApiError::NoteNotFound)?;
    let note = state.store().update(id, fields).await?;
    tracing::info!(note_id = %note.id, "note updated");
    Ok(Json(note))
}

/// DELETE /api/notes/{id} - idempotent
#[instrument(skip_all, fields(note_id = ?id))]
async fn delete_note(State(state): State<AppState>, NotePath(id): NotePath) -> StatusCode {
    if let Some(id) = id {
        if state.store().delete(id).await {
            tracing::info!(note_id = %id, "note deleted");
        }
    }
    StatusCode::NO_CONTENT
}

/// Note routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}
