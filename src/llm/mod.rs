//! LLM client module for API interactions.
//!
//! This module provides the completion-client side of the crate: the
//! [`CompletionClient`] trait, its error taxonomy, and the reqwest-based
//! [`OpenAiClient`] for OpenAI-compatible chat completion endpoints.

mod openai;
mod provider;

pub use openai::OpenAiClient;
pub use provider::{ClientError, ClientResult, CompletionClient};

/// Default API base URL.
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default model used when neither config file nor environment names one.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// LLM client configuration.
///
/// Read once at construction and passed explicitly; business logic never
/// touches the process environment.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            temperature: Some(0.7),
            max_tokens: Some(4096),
        }
    }
}

impl LlmConfig {
    /// Check if the client is configured with an API key.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Load from environment variables, with file config as fallback.
    ///
    /// File values are applied first; `OPENAI_API_KEY` and `MODEL_NAME`
    /// override them when set.
    pub fn from_env_and_config(file_config: Option<&crate::config::LlmConfigFile>) -> Self {
        let mut config = Self::default();

        if let Some(fc) = file_config {
            config.api_base = fc.api_base.clone();
            if let Some(ref key) = fc.api_key {
                config.api_key = key.clone();
            }
            config.model = fc.model.clone();
            config.temperature = fc.temperature;
            config.max_tokens = fc.max_tokens;
        }

        // Environment variable overrides file config
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config.api_key = key;
        }

        if let Ok(model) = std::env::var("MODEL_NAME") {
            config.model = model;
        }

        config
    }

    /// Load purely from the environment, with built-in defaults.
    pub fn from_env() -> Self {
        Self::from_env_and_config(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();
        assert_eq!(config.api_base, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert!(config.api_key.is_empty());
        assert_eq!(config.temperature, Some(0.7));
        assert_eq!(config.max_tokens, Some(4096));
    }

    #[test]
    fn test_not_configured_without_key() {
        let config = LlmConfig::default();
        assert!(!config.is_configured());
    }

    #[test]
    fn test_configured_with_key() {
        let mut config = LlmConfig::default();
        config.api_key = "test-key".to_string();
        assert!(config.is_configured());
    }

    #[test]
    fn test_file_config_applied() {
        std::env::remove_var("OPENAI_API_KEY");
        std::env::remove_var("MODEL_NAME");
        let file = crate::config::LlmConfigFile {
            api_base: "https://example.test/v1".to_string(),
            api_key: Some("file-key".to_string()),
            model: "test-model".to_string(),
            temperature: Some(0.2),
            max_tokens: Some(128),
        };
        let config = LlmConfig::from_env_and_config(Some(&file));
        assert_eq!(config.api_base, "https://example.test/v1");
        assert_eq!(config.model, "test-model");
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.max_tokens, Some(128));
    }
}
