//! OpenAI-compatible chat completions client.
//!
//! Sends a single non-streaming request per call and returns the first
//! choice's content. Works against any endpoint speaking the OpenAI
//! `/chat/completions` format.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::{ClientError, ClientResult, CompletionClient, LlmConfig, DEFAULT_API_BASE};
use crate::message::Message;

/// Client for OpenAI-compatible chat completion endpoints.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    config: Arc<LlmConfig>,
}

impl OpenAiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    /// Get the API base URL.
    fn api_base(&self) -> &str {
        if self.config.api_base.is_empty() {
            DEFAULT_API_BASE
        } else {
            &self.config.api_base
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn model(&self) -> &str {
        &self.config.model
    }

    fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    async fn complete(&self, messages: &[Message]) -> ClientResult<String> {
        if self.config.api_key.is_empty() {
            return Err(ClientError::NotConfigured(
                "OpenAI API key not set. Set OPENAI_API_KEY environment variable.".to_string(),
            ));
        }

        let url = format!("{}/chat/completions", self.api_base().trim_end_matches('/'));
        let request = ChatRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(
            model = %self.config.model,
            count = messages.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            // Prefer the structured error message when the body parses
            if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(&body) {
                return Err(ClientError::ApiError {
                    status: status.as_u16(),
                    message: error_resp.error.message,
                });
            }

            return Err(ClientError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ClientError::MalformedResponse("response contained no choices".to_string())
            })?;

        debug!(chars = content.len(), "received chat completion");
        Ok(content)
    }
}

/// Chat request body (OpenAI format).
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Chat completion response body.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

/// A single choice in the completion response.
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

/// The generated message inside a choice.
#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Error response wrapper.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiErrorBody,
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    #[allow(dead_code)]
    code: Option<String>,
}
