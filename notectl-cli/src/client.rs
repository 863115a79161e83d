//! HTTP client for the notes API

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use notectl_core::{Note, NoteFields, NoteId};

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    message: String,
}

/// Typed client for `/api/notes`
#[derive(Debug, Clone)]
pub struct NoteClient {
    http: Client,
    endpoint: String,
}

impl NoteClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn notes_url(&self) -> String {
        format!("{}/api/notes", self.endpoint)
    }

    fn note_url(&self, id: NoteId) -> String {
        format!("{}/api/notes/{}", self.endpoint, id)
    }

    pub async fn list(&self) -> Result<Vec<Note>> {
        let response = self
            .http
            .get(self.notes_url())
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", self.endpoint))?;
        handle_response(response).await
    }

    pub async fn get(&self, id: NoteId) -> Result<Note> {
        let response = self
            .http
            .get(self.note_url(id))
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", self.endpoint))?;
        handle_response(response).await
    }

    pub async fn create(&self, fields: &NoteFields) -> Result<Note> {
        let response = self
            .http
            .post(self.notes_url())
            .json(fields)
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", self.endpoint))?;
        handle_response(response).await
    }

    pub async fn update(&self, id: NoteId, fields: &NoteFields) -> Result<Note> {
        let response = self
            .http
            .put(self.note_url(id))
            .json(fields)
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", self.endpoint))?;
        handle_response(response).await
    }

    pub async fn delete(&self, id: NoteId) -> Result<()> {
        let response = self
            .http
            .delete(self.note_url(id))
            .send()
            .await
            .with_context(|| format!("Failed to connect to {}", self.endpoint))?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            status => Err(error_from(status, response).await),
        }
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response.json::<T>().await.context("Failed to parse response")
    } else {
        Err(error_from(status, response).await)
    }
}

async fn error_from(status: StatusCode, response: Response) -> anyhow::Error {
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    match serde_json::from_str::<ErrorResponse>(&error_text) {
        Ok(err) => anyhow!("{}: {}", status, err.message),
        Err(_) => anyhow!("{}: {}", status, error_text),
    }
}
