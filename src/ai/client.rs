//! LLM (`OpenRouter`) API client module
//!
//! Encapsulates all LLM API interactions for generating greeting messages.

use std::time::Duration;

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use crate::core::config::AppConfig;
use crate::core::models::GeneratedMessage;
use crate::errors::GreetingError;

const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const DEFAULT_MODEL: &str = "deepseek/deepseek-r1-0528:free";
const REQUEST_TIMEOUT_SECS: u64 = 120;

// Attribution headers OpenRouter uses for app rankings
const REFERER: &str = "https://eid-greetings.app";
const APP_TITLE: &str = "Eid Greetings App";

/// LLM API client for generating greeting messages.
pub struct GenerationClient {
    api_key: String,
    model_name: String,
}

impl GenerationClient {
    #[must_use]
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
        }
    }

    /// Builds a client from config, falling back to the default model.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.openrouter_api_key.clone(),
            config
                .openrouter_model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        )
    }

    /// Sends the prompt to the chat-completion endpoint and returns the
    /// generated greeting.
    ///
    /// Model output that is not the requested JSON shape degrades to using
    /// the raw text as the primary message with no alternatives. There is no
    /// fallback generation and no retry.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the service responds with
    /// a non-success status, or the response carries no message content.
    pub async fn generate_message(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<GeneratedMessage, GreetingError> {
        #[cfg(feature = "debug-logs")]
        info!("Using generation prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Generating greeting with {} messages in prompt",
            prompt.len()
        );

        let request_body = json!({
            "model": self.model_name,
            "messages": build_chat_input(&prompt),
            "response_format": { "type": "json_object" }
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                GreetingError::HttpError(format!("Failed to build OpenRouter HTTP client: {e}"))
            })?;

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| GreetingError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| GreetingError::HttpError(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        let referer_value = REFERER
            .parse()
            .map_err(|e| GreetingError::HttpError(format!("Invalid HTTP-Referer header: {e}")))?;
        headers.insert("HTTP-Referer", referer_value);

        let title_value = APP_TITLE
            .parse()
            .map_err(|e| GreetingError::HttpError(format!("Invalid X-Title header: {e}")))?;
        headers.insert("X-Title", title_value);

        let response = client
            .post(OPENROUTER_URL)
            .headers(headers)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                GreetingError::HttpError(format!("OpenRouter API request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(GreetingError::GenerationError(format!(
                "OpenRouter API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            GreetingError::GenerationError(format!("Failed to parse OpenRouter response: {e}"))
        })?;

        let content = response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                GreetingError::GenerationError("No message content in response".to_string())
            })?;

        Ok(parse_generated(content))
    }
}

/// Shape the system prompt asks the model to produce.
#[derive(Debug, Deserialize)]
struct RawGenerated {
    primary: String,
    #[serde(default)]
    alternatives: Vec<String>,
}

/// Parses model output into a [`GeneratedMessage`].
///
/// Falls back to treating the whole content as the primary message when it
/// is not the requested JSON object.
#[must_use]
pub fn parse_generated(content: &str) -> GeneratedMessage {
    match serde_json::from_str::<RawGenerated>(content) {
        Ok(raw) => GeneratedMessage {
            primary_message: raw.primary,
            alternative_messages: raw.alternatives,
        },
        Err(_) => GeneratedMessage {
            primary_message: content.to_string(),
            alternative_messages: Vec::new(),
        },
    }
}

/// Builds the chat-completions `messages` payload from the prompt.
/// Only text content is emitted; greeting prompts never carry images.
pub(crate) fn build_chat_input(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter_map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::assistant => "assistant",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
            };

            match &m.content {
                Content::Text(t) => Some(json!({
                    "role": role_str,
                    "content": t
                })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}
