use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::template::NoteModel;

const API_VERSION: u32 = 6;

#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnkiConnectClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Check if AnkiConnect is available
    pub async fn check_connection(&self) -> Result<u32> {
        self.invoke("version", json!({})).await
    }

    /// Get list of model (note type) names
    pub async fn model_names(&self) -> Result<Vec<String>> {
        self.invoke("modelNames", json!({})).await
    }

    /// Create a deck; existing decks are left alone by AnkiConnect
    pub async fn create_deck(&self, deck: &str) -> Result<u64> {
        self.invoke("createDeck", json!({ "deck": deck })).await
    }

    pub async fn create_model(&self, model: &NoteModel) -> Result<serde_json::Value> {
        self.invoke("createModel", model.to_params()).await
    }

    /// Whether each note would be accepted, duplicates reported as `false`
    pub async fn can_add_notes(&self, notes: &[serde_json::Value]) -> Result<Vec<bool>> {
        self.invoke("canAddNotes", json!({ "notes": notes })).await
    }

    /// Add notes in one request; rejected notes come back as `None`
    pub async fn add_notes(&self, notes: Vec<serde_json::Value>) -> Result<Vec<Option<u64>>> {
        self.invoke("addNotes", json!({ "notes": notes })).await
    }

    /// Invoke an AnkiConnect API action
    async fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action,
            version: API_VERSION,
            params,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to send `{action}` to AnkiConnect"))?;

        response
            .json::<AnkiResponse<T>>()
            .await
            .context("Failed to parse AnkiConnect response")?
            .into_result()
    }
}

#[derive(Serialize)]
struct AnkiRequest<'a> {
    action: &'a str,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result.context("AnkiConnect returned null result")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_wins() {
        let response: AnkiResponse<u64> =
            serde_json::from_str(r#"{ "result": null, "error": "deck was not found" }"#).unwrap();
        let err = response.into_result().unwrap_err();
        assert!(err.to_string().contains("deck was not found"));
    }

    #[test]
    fn partial_add_notes_result() {
        let response: AnkiResponse<Vec<Option<u64>>> =
            serde_json::from_str(r#"{ "result": [1496198395707, null], "error": null }"#).unwrap();
        assert_eq!(response.into_result().unwrap(), [Some(1496198395707), None]);
    }

    #[test]
    fn duplicate_rejection_is_an_error() {
        let response: AnkiResponse<Vec<Option<u64>>> = serde_json::from_str(
            r#"{ "result": null, "error": "['cannot create note because it is a duplicate']" }"#,
        )
        .unwrap();
        let err = response.into_result().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn can_add_notes_result() {
        let response: AnkiResponse<Vec<bool>> =
            serde_json::from_str(r#"{ "result": [true, false, true], "error": null }"#).unwrap();
        assert_eq!(response.into_result().unwrap(), [true, false, true]);
    }

    #[test]
    fn null_result_without_error_is_rejected() {
        let response: AnkiResponse<u32> =
            serde_json::from_str(r#"{ "result": null, "error": null }"#).unwrap();
        assert!(response.into_result().is_err());
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error() {
        let client = AnkiConnectClient::new("http://127.0.0.1:9");
        assert!(client.check_connection().await.is_err());
    }
}
