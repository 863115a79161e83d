//! API error types with IntoResponse
//!
//! Every failure is an expected, user-facing outcome rendered as
//! `{"message": "..."}` with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use notectl_core::StoreError;

/// Body message for a rejected create/update payload
pub const INVALID_NOTE_MESSAGE: &str = "Invalid note data";

/// Body message for a missing note
pub const NOT_FOUND_MESSAGE: &str = "Note not found";

/// API error type with HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body failed the note schema (400)
    InvalidNote { reason: String },

    /// Note id not held by the store (404)
    NoteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidNote { .. } => StatusCode::BAD_REQUEST,
            Self::NoteNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::InvalidNote { .. } => INVALID_NOTE_MESSAGE,
            Self::NoteNotFound => NOT_FOUND_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::InvalidNote { reason } = &self {
            tracing::debug!(%reason, "rejected note payload");
        }

        let body = json!({ "message": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => Self::NoteNotFound,
        }
    }
}

/// Server startup/shutdown error
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use notectl_core::NoteId;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_note_is_400() {
        let err = ApiError::InvalidNote {
            reason: "missing field `content`".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "message": "Invalid note data" }));
    }

    #[tokio::test]
    async fn store_not_found_is_404() {
        let err: ApiError = StoreError::NotFound(NoteId::new(3)).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "message": "Note not found" }));
    }
}
