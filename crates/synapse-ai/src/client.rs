//! OpenAI client handle over the chat-completions HTTP API.

use reqwest::Client;
use serde_json::json;

use synapse_core::config::OpenAiSettings;

const API_BASE: &str = "https://api.openai.com/v1";

/// Errors from AI requests.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Shared OpenAI client handle.
///
/// Clone is cheap (reqwest::Client is an Arc around its pool) and every clone
/// shares the same connection pool.
#[derive(Clone, Debug)]
pub struct AiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl AiClient {
    /// Build the handle from whatever key the settings carry.
    ///
    /// Key presence is not checked here; an absent key is forwarded as an
    /// empty credential and rejected by the API at first use.
    pub fn new(settings: &OpenAiSettings) -> Self {
        tracing::debug!(
            api_key = settings.api_key.is_some(),
            "AI client constructed"
        );
        Self {
            client: Client::new(),
            api_key: settings.api_key.clone(),
            base_url: API_BASE.to_string(),
        }
    }

    /// Override the API base URL (OpenAI-compatible proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key.as_deref().unwrap_or_default())
    }

    /// Single-turn chat completion; returns the assistant message text.
    pub async fn chat_completion(&self, model: &str, prompt: &str) -> Result<String, AiError> {
        tracing::debug!(model, "Chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", self.bearer())
            .json(&json!({
                "model": model,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ],
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api { status, body });
        }

        let data = response.json::<serde_json::Value>().await?;
        data["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| AiError::MalformedResponse(data.to_string()))
    }

    /// List available model IDs — the minimal call that exercises the key.
    pub async fn list_models(&self) -> Result<Vec<String>, AiError> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .header("Authorization", self.bearer())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api { status, body });
        }

        let data = response.json::<serde_json::Value>().await?;
        let models = data["data"]
            .as_array()
            .ok_or_else(|| AiError::MalformedResponse(data.to_string()))?
            .iter()
            .filter_map(|m| m["id"].as_str().map(|s| s.to_string()))
            .collect();
        Ok(models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_with_key() {
        let client = AiClient::new(&OpenAiSettings {
            api_key: Some("sk-test".to_string()),
        });
        assert_eq!(client.api_key.as_deref(), Some("sk-test"));
        assert_eq!(client.base_url, API_BASE);
    }

    #[test]
    fn construction_without_key_completes() {
        let client = AiClient::new(&OpenAiSettings::default());
        assert!(client.api_key.is_none());
    }

    #[test]
    fn absent_key_is_forwarded_empty() {
        let client = AiClient::new(&OpenAiSettings::default());
        assert_eq!(client.bearer(), "Bearer ");
    }

    #[test]
    fn base_url_override() {
        let client = AiClient::new(&OpenAiSettings::default())
            .with_base_url("http://localhost:8080/v1");
        assert_eq!(client.base_url, "http://localhost:8080/v1");
    }
}
