//! HTTP client for the notes API.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, info};

use notes_core::{Note, NoteInput};

use crate::error::{ClientError, Result};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5135";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`NotesClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API, without the `/notes` suffix.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Reads `NOTES_API_URL` and `NOTES_API_TIMEOUT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("NOTES_API_URL")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_seconds: lookup("NOTES_API_TIMEOUT")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Error payload returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed client for the notes API.
///
/// Every failed call is logged at `error` level and returned to the caller
/// unchanged. Calls are never retried.
#[derive(Debug, Clone)]
pub struct NotesClient {
    client: Client,
    config: ClientConfig,
}

impl NotesClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            subsystem = "client",
            base_url = %config.base_url,
            timeout_secs = config.timeout_seconds,
            "Initializing notes client"
        );

        Ok(Self { client, config })
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn note_url(&self, id: i64) -> String {
        self.url(&format!("/notes/{}", id))
    }

    /// `GET /notes`
    pub async fn get_all_notes(&self) -> Result<Vec<Note>> {
        let result = async {
            let response = send(self.client.get(self.url("/notes"))).await?;
            decode::<Vec<Note>>(response).await
        }
        .await;
        logged(result, "get_all_notes", None, "Error fetching notes")
    }

    /// `GET /notes/{id}`
    pub async fn get_note(&self, id: i64) -> Result<Note> {
        let result = async {
            let response = send(self.client.get(self.note_url(id))).await?;
            decode::<Note>(response).await
        }
        .await;
        logged(result, "get_note", Some(id), "Error fetching note")
    }

    /// `POST /notes`, returning the stored note.
    pub async fn create_note(&self, input: &NoteInput) -> Result<Note> {
        let result = async {
            let response = send(self.client.post(self.url("/notes")).json(input)).await?;
            decode::<Note>(response).await
        }
        .await;
        logged(result, "create_note", None, "Error creating note")
    }

    /// `PUT /notes/{id}`. The API answers with an empty body.
    pub async fn update_note(&self, id: i64, input: &NoteInput) -> Result<()> {
        let result = send(self.client.put(self.note_url(id)).json(input))
            .await
            .map(|_| ());
        logged(result, "update_note", Some(id), "Error updating note")
    }

    /// `DELETE /notes/{id}`
    pub async fn delete_note(&self, id: i64) -> Result<()> {
        let result = send(self.client.delete(self.note_url(id)))
            .await
            .map(|_| ());
        logged(result, "delete_note", Some(id), "Error deleting note")
    }
}

/// Sends the request and turns non-2xx answers into [`ClientError::Status`].
async fn send(request: RequestBuilder) -> Result<Response> {
    let response = request.send().await?;
    let status = response.status();
    debug!(subsystem = "client", status = status.as_u16(), url = %response.url(), "Response received");

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
        Err(_) => body,
    };
    Err(ClientError::Status { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

fn logged<T>(result: Result<T>, op: &str, note_id: Option<i64>, message: &str) -> Result<T> {
    if let Err(ref e) = result {
        error!(
            subsystem = "client",
            op,
            note_id,
            status = e.status().map(|s| s.as_u16()),
            error = %e,
            "{}",
            message
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:5135");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_config_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("NOTES_API_URL", "https://notes.example.com/"),
            ("NOTES_API_TIMEOUT", "5"),
        ]));
        assert_eq!(config.base_url, "https://notes.example.com/");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_config_bad_timeout_falls_back() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("NOTES_API_URL", "  "),
            ("NOTES_API_TIMEOUT", "soon"),
        ]));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = NotesClient::new(ClientConfig {
            base_url: "http://api.local/".to_string(),
            timeout_seconds: 1,
        })
        .unwrap();
        assert_eq!(client.url("/notes"), "http://api.local/notes");
        assert_eq!(client.note_url(4), "http://api.local/notes/4");
    }
}
