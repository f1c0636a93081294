//! Completion API boundary: the [`CompletionClient`] trait and the
//! [`OpenAiClient`] implementation.
//!
//! `OpenAiClient` calls an OpenAI-compatible `/v1/chat/completions`
//! endpoint.  Model, token bound and temperature are fixed; only the base URL
//! is configurable.  There is no timeout or retry in here, callers wrap the
//! call if they want one.

use async_trait::async_trait;
use thiserror::Error;

use crate::caption::prompt::ComposedPrompt;
use crate::caption::request::Credential;
use crate::config::CompletionConfig;

/// Model identifier sent with every request.
pub const MODEL: &str = "gpt-4o";
/// Upper bound on generated tokens.
pub const MAX_TOKENS: u32 = 500;
/// High-variance sampling so repeated requests differ.
pub const TEMPERATURE: f32 = 0.8;

// ---------------------------------------------------------------------------
// CompletionError
// ---------------------------------------------------------------------------

/// Raw failure from the completion API, before classification.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// Non-success HTTP status; `message` is the provider's error text.
    #[error("HTTP status {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("failed to parse completion response: {0}")]
    Parse(String),

    /// The response had no usable text.
    #[error("completion API returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        CompletionError::Request(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// CompletionClient trait
// ---------------------------------------------------------------------------

/// Given a prompt and credential, returns generated text or fails.
///
/// Implementors must be `Send + Sync` so a generator can be shared across
/// request handlers.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &ComposedPrompt,
        credential: &Credential,
    ) -> Result<String, CompletionError>;
}

// ---------------------------------------------------------------------------
// OpenAiClient
// ---------------------------------------------------------------------------

/// Chat-completions client for OpenAI and compatible providers.
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &CompletionConfig) -> Self {
        Self::new(config.base_url.as_str())
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn request_body(prompt: &ComposedPrompt) -> serde_json::Value {
        let messages: Vec<serde_json::Value> = prompt
            .messages()
            .iter()
            .map(|(role, content)| serde_json::json!({ "role": role, "content": content }))
            .collect();

        serde_json::json!({
            "model":       MODEL,
            "messages":    messages,
            "max_tokens":  MAX_TOKENS,
            "temperature": TEMPERATURE,
        })
    }
}

/// Pull `error.message` out of an OpenAI-style error body, falling back to
/// the raw body text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        prompt: &ComposedPrompt,
        credential: &Credential,
    ) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(credential.expose())
            .json(&Self::request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status,
                message: error_message(&body),
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(CompletionError::EmptyResponse)?
            .trim()
            .to_string();

        if content.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }

        Ok(content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::prompt::compose;
    use crate::caption::request::Length;

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let client = OpenAiClient::new("http://localhost:8080/");
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn request_body_uses_fixed_parameters() {
        let prompt = compose("coffee", &["funny".to_string()], Length::Short);
        let body = OpenAiClient::request_body(&prompt);

        assert_eq!(body["model"], MODEL);
        assert_eq!(body["max_tokens"], MAX_TOKENS);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], prompt.system());
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], prompt.user());
        let temperature = body["temperature"].as_f64().unwrap();
        assert!((temperature - 0.8).abs() < 1e-6);
    }

    #[test]
    fn error_message_prefers_provider_text() {
        let body = r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota"}}"#;
        assert_eq!(error_message(body), "You exceeded your current quota");
        assert_eq!(error_message("  upstream down \n"), "upstream down");
    }

    #[test]
    fn from_config_uses_base_url() {
        let config = CompletionConfig {
            base_url: "https://example.test".into(),
            ..CompletionConfig::default()
        };
        let client = OpenAiClient::from_config(&config);
        assert_eq!(client.endpoint(), "https://example.test/v1/chat/completions");
    }

    #[test]
    fn client_is_object_safe() {
        let client: Box<dyn CompletionClient> = Box::new(OpenAiClient::new("http://localhost"));
        drop(client);
    }
}
