//! OpenAI chat completions.

use super::chat_completions::{AuthHeader, ChatCompletionsClassifier};
use super::factory::{ProviderSetupError, require_key};
use super::http;
use std::time::Duration;
use triage_domain::{OpenAiProviderConfig, ProviderKind};

impl ChatCompletionsClassifier {
    /// `POST {base_url}/v1/chat/completions` with bearer auth.
    pub fn openai(
        config: &OpenAiProviderConfig,
        timeout: Duration,
    ) -> Result<Self, ProviderSetupError> {
        let key = require_key(ProviderKind::OpenAi, config.api_key.as_deref())?;
        let url = format!(
            "{}/v1/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        Ok(Self::new(
            ProviderKind::OpenAi.as_str(),
            http::build_client(timeout)?,
            url,
            AuthHeader::Bearer(key),
            Some(config.model.clone()),
            config.max_tokens,
            timeout,
        ))
    }
}
