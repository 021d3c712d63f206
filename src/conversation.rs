//! Conversation facade composing history and completion client.

use std::sync::Arc;

use crate::history::ChatHistory;
use crate::llm::{ClientResult, CompletionClient, LlmConfig, OpenAiClient};
use crate::message::Message;

/// A conversation against a completion client, with optional history.
///
/// This is a thin facade: it decides what message sequence to send, asks the
/// client, and records the exchange when history is in play. Client failures
/// propagate to the caller unchanged; there are no retries and no recovery.
pub struct Conversation {
    client: Arc<dyn CompletionClient>,
    history: ChatHistory,
}

impl Conversation {
    /// Create a conversation backed by an [`OpenAiClient`] with the given
    /// configuration and an empty, unbounded history.
    pub fn new(config: LlmConfig) -> Self {
        Self::from_client(Arc::new(OpenAiClient::new(config)))
    }

    /// Create a conversation from an existing client.
    ///
    /// Use this when you have a custom or pre-configured client.
    pub fn from_client(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            history: ChatHistory::new(),
        }
    }

    /// Replace the history buffer, e.g. to cap its length or pre-seed it.
    pub fn with_history(mut self, history: ChatHistory) -> Self {
        self.history = history;
        self
    }

    /// Get the model the underlying client sends requests for.
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Check if the underlying client is configured.
    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Generate a response from the language model.
    ///
    /// Exactly one of three input modes applies, in priority order:
    ///
    /// 1. A non-empty `custom_messages` slice is sent verbatim; history is
    ///    neither read nor written.
    /// 2. Otherwise, with `use_history`, `query` is appended to the history
    ///    as a user message, the full history is sent, and the reply is
    ///    appended as an assistant message. On failure the user message
    ///    stays in the history.
    /// 3. Otherwise the payload is just `query` as a single user message and
    ///    history is untouched.
    pub async fn generate(
        &mut self,
        query: &str,
        use_history: bool,
        custom_messages: Option<&[Message]>,
    ) -> ClientResult<String> {
        match custom_messages {
            Some(custom) if !custom.is_empty() => self.client.complete(custom).await,
            _ if use_history => {
                self.history.add_user_message(query);
                let messages = self.history.snapshot();
                let reply = self.client.complete(&messages).await?;
                self.history.add_assistant_message(reply.clone());
                Ok(reply)
            }
            _ => self.client.complete(&[Message::user(query)]).await,
        }
    }

    /// Add or replace the system message in the conversation history.
    pub fn add_system_message(&mut self, content: impl Into<String>) {
        self.history.add_system_message(content);
    }

    /// Clear the conversation history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Get a copy of the current conversation history.
    pub fn get_history(&self) -> Vec<Message> {
        self.history.snapshot()
    }
}
