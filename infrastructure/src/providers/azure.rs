//! Azure OpenAI deployments.
//!
//! The deployment in the URL selects the model, so the request body carries
//! no `model` field. The key goes in the `api-key` header.

use super::chat_completions::{AuthHeader, ChatCompletionsClassifier};
use super::factory::{ProviderSetupError, require_key};
use super::http;
use std::time::Duration;
use triage_domain::{AzureOpenAiProviderConfig, ProviderKind};

impl ChatCompletionsClassifier {
    /// `POST {endpoint}/openai/deployments/{deployment}/chat/completions?api-version={v}`.
    pub fn azure_openai(
        config: &AzureOpenAiProviderConfig,
        timeout: Duration,
    ) -> Result<Self, ProviderSetupError> {
        let kind = ProviderKind::AzureOpenAi;
        let key = require_key(kind, config.api_key.as_deref())?;
        let endpoint = required(kind, "endpoint", config.endpoint.as_deref())?;
        let deployment = required(kind, "deployment", config.deployment.as_deref())?;

        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            endpoint.trim_end_matches('/'),
            deployment,
            config.api_version
        );
        Ok(Self::new(
            kind.as_str(),
            http::build_client(timeout)?,
            url,
            AuthHeader::ApiKey(key),
            None,
            config.max_tokens,
            timeout,
        ))
    }
}

fn required<'a>(
    provider: ProviderKind,
    setting: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ProviderSetupError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ProviderSetupError::MissingSetting { provider, setting })
}
