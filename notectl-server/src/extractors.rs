//! Custom Axum extractors

use std::convert::Infallible;

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde_json::Value as JsonValue;

use notectl_core::{NoteFields, NoteId};

use crate::error::ApiError;

/// Note id from the path.
///
/// The segment's leading digits are the id (`1abc` is note 1). A segment
/// with no leading digits yields `None`: it matches no note, so handlers
/// report it the same way as an absent id.
pub struct NotePath(pub Option<NoteId>);

impl<S> FromRequestParts<S> for NotePath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let id = Path::<String>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path(raw)| NoteId::from_path_segment(&raw));

        Ok(Self(id))
    }
}

/// Create/update body validated against the note schema.
///
/// Any rejection (bad syntax, missing content type, non-object body, wrong
/// field types, missing fields) becomes a 400 before the store is touched.
pub struct NoteBody(pub NoteFields);

impl<S> FromRequest<S> for NoteBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<JsonValue>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidNote {
                reason: rejection.body_text(),
            })?;

        // serde accepts `[title, content]` arrays for structs; only objects are notes
        if !value.is_object() {
            return Err(ApiError::InvalidNote {
                reason: "body is not a JSON object".into(),
            });
        }

        let fields = serde_json::from_value::<NoteFields>(value).map_err(|e| ApiError::InvalidNote {
            reason: e.to_string(),
        })?;

        Ok(Self(fields))
    }
}
