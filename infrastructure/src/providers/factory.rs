//! Classifier construction from the resolved provider configuration.

use super::anthropic::AnthropicClassifier;
use super::chat_completions::ChatCompletionsClassifier;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;
use triage_application::FeedbackClassifier;
use triage_domain::{ProviderConfig, ProviderKind};

/// Startup failures while building a classifier. All are fatal.
#[derive(Error, Debug)]
pub enum ProviderSetupError {
    #[error("No API key configured for provider '{0}' (set it in config or via its API key environment variable)")]
    MissingApiKey(ProviderKind),

    #[error("Provider '{provider}' requires '{setting}' to be configured")]
    MissingSetting {
        provider: ProviderKind,
        setting: &'static str,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub(crate) fn require_key(
    provider: ProviderKind,
    key: Option<&str>,
) -> Result<String, ProviderSetupError> {
    key.map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .ok_or(ProviderSetupError::MissingApiKey(provider))
}

/// Build the classifier for `config.active`.
pub fn build_classifier(
    config: &ProviderConfig,
    timeout: Duration,
) -> Result<Arc<dyn FeedbackClassifier>, ProviderSetupError> {
    let classifier: Arc<dyn FeedbackClassifier> = match config.active {
        ProviderKind::OpenAi => Arc::new(ChatCompletionsClassifier::openai(&config.openai, timeout)?),
        ProviderKind::Anthropic => Arc::new(AnthropicClassifier::new(&config.anthropic, timeout)?),
        ProviderKind::AzureOpenAi => Arc::new(ChatCompletionsClassifier::azure_openai(
            &config.azure_openai,
            timeout,
        )?),
        ProviderKind::Groq => Arc::new(ChatCompletionsClassifier::groq(&config.groq, timeout)?),
    };
    info!(provider = %config.active, timeout_ms = timeout.as_millis() as u64, "Classifier ready");
    Ok(classifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_each_provider() {
        let mut config = ProviderConfig::default();
        config.openai.api_key = Some("a".into());
        config.anthropic.api_key = Some("b".into());
        config.groq.api_key = Some("c".into());
        config.azure_openai.api_key = Some("d".into());
        config.azure_openai.endpoint = Some("https://r.openai.azure.com".into());
        config.azure_openai.deployment = Some("gpt".into());

        for kind in ProviderKind::ALL {
            config.active = kind;
            let classifier = build_classifier(&config, Duration::from_secs(10)).unwrap();
            assert_eq!(classifier.provider_name(), kind.as_str());
        }
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let config = ProviderConfig {
            active: ProviderKind::Anthropic,
            ..Default::default()
        };
        let err = build_classifier(&config, Duration::from_secs(10)).err().unwrap();
        assert!(matches!(err, ProviderSetupError::MissingApiKey(ProviderKind::Anthropic)));
        assert!(err.to_string().contains("anthropic"));
    }

    #[test]
    fn test_blank_key_is_missing() {
        assert!(require_key(ProviderKind::Groq, Some("   ")).is_err());
        assert_eq!(require_key(ProviderKind::Groq, Some(" k ")).unwrap(), "k");
    }
}
