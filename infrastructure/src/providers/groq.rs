//! Groq, through its OpenAI-compatible endpoint.

use super::chat_completions::{AuthHeader, ChatCompletionsClassifier};
use super::factory::{ProviderSetupError, require_key};
use super::http;
use std::time::Duration;
use triage_domain::{GroqProviderConfig, ProviderKind};

impl ChatCompletionsClassifier {
    /// `POST {base_url}/openai/v1/chat/completions` with bearer auth.
    pub fn groq(config: &GroqProviderConfig, timeout: Duration) -> Result<Self, ProviderSetupError> {
        let key = require_key(ProviderKind::Groq, config.api_key.as_deref())?;
        let url = format!(
            "{}/openai/v1/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        Ok(Self::new(
            ProviderKind::Groq.as_str(),
            http::build_client(timeout)?,
            url,
            AuthHeader::Bearer(key),
            Some(config.model.clone()),
            config.max_tokens,
            timeout,
        ))
    }
}
