//! HTTP client for the remote notes service.
//!
//! All responses arrive wrapped in a `{ "data": ... }` envelope. Every
//! operation validates the HTTP status before decoding; a non-success
//! status becomes `NotaError::Operation`, a transport failure becomes
//! `NotaError::Network`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::{NotaError, Result};
use crate::note::Note;

pub const DEFAULT_BASE_URL: &str = "https://notes-api.dicoding.dev/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response envelope used by every endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// The five operations the orchestrator needs from the service.
/// Abstracted so tests can drive the orchestrator with a mock.
#[async_trait]
pub trait NoteService: Send + Sync {
    async fn list_notes(&self) -> Result<Vec<Note>>;
    async fn create_note(&self, title: &str, body: &str) -> Result<Note>;
    async fn delete_note(&self, id: &str) -> Result<()>;
    async fn archive_note(&self, id: &str) -> Result<Note>;
    async fn unarchive_note(&self, id: &str) -> Result<Note>;
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check_status(op: String, response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(NotaError::Operation { op, status });
        }
        Ok(response)
    }

    async fn toggle_archive(&self, id: &str, action: &str) -> Result<Note> {
        let url = self.url(&format!("/notes/{}/{}", id, action));
        debug!(url = %url, "requesting {}", action);

        let response = self.client.post(&url).send().await?;
        let response = Self::check_status(format!("{} note {}", action, id), response)?;
        Ok(response.json::<Envelope<Note>>().await?.data)
    }
}

#[async_trait]
impl NoteService for ApiClient {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        let url = self.url("/notes");
        debug!(url = %url, "listing notes");

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status("list notes".to_string(), response)?;
        Ok(response.json::<Envelope<Vec<Note>>>().await?.data)
    }

    async fn create_note(&self, title: &str, body: &str) -> Result<Note> {
        let url = self.url("/notes");
        debug!(url = %url, title = %title, "creating note");

        let response = self
            .client
            .post(&url)
            .json(&json!({ "title": title, "body": body }))
            .send()
            .await?;
        let response = Self::check_status("create note".to_string(), response)?;
        Ok(response.json::<Envelope<Note>>().await?.data)
    }

    async fn delete_note(&self, id: &str) -> Result<()> {
        let url = self.url(&format!("/notes/{}", id));
        debug!(url = %url, "deleting note");

        let response = self.client.delete(&url).send().await?;
        Self::check_status(format!("delete note {}", id), response)?;
        Ok(())
    }

    async fn archive_note(&self, id: &str) -> Result<Note> {
        self.toggle_archive(id, "archive").await
    }

    async fn unarchive_note(&self, id: &str) -> Result<Note> {
        self.toggle_archive(id, "unarchive").await
    }
}
