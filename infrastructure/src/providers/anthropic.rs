//! Anthropic Messages API adapter.

use super::factory::{ProviderSetupError, require_key};
use super::http::{self, TEMPERATURE};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;
use triage_application::{FeedbackClassifier, ProviderError, RawOutput};
use triage_domain::{AnthropicProviderConfig, Category, ProviderKind, TriagePromptTemplate};

/// Classifier backed by `POST {base_url}/v1/messages`.
pub struct AnthropicClassifier {
    client: reqwest::Client,
    url: String,
    api_key: String,
    api_version: String,
    model: String,
    max_tokens: u32,
    timeout: Duration,
}

impl std::fmt::Debug for AnthropicClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClassifier")
            .field("url", &self.url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicClassifier {
    pub fn new(
        config: &AnthropicProviderConfig,
        timeout: Duration,
    ) -> Result<Self, ProviderSetupError> {
        let api_key = require_key(ProviderKind::Anthropic, config.api_key.as_deref())?;
        Ok(Self {
            client: http::build_client(timeout)?,
            url: format!("{}/v1/messages", config.base_url.trim_end_matches('/')),
            api_key,
            api_version: config.api_version.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            timeout,
        })
    }
}

#[async_trait]
impl FeedbackClassifier for AnthropicClassifier {
    fn provider_name(&self) -> &str {
        ProviderKind::Anthropic.as_str()
    }

    async fn classify(
        &self,
        text: &str,
        manual_category: Option<Category>,
    ) -> Result<RawOutput, ProviderError> {
        let prompt = TriagePromptTemplate::for_submission(text, manual_category);
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: TEMPERATURE,
            system: TriagePromptTemplate::system(),
            messages: [Message {
                role: "user",
                content: &prompt,
            }],
        };

        let request = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version);

        let started = Instant::now();
        let response: MessagesResponse = http::post_json(request, &body, self.timeout).await?;
        let elapsed = started.elapsed();

        let content = response
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .unwrap_or_default();

        debug!(
            provider = "anthropic",
            elapsed_ms = elapsed.as_millis() as u64,
            bytes = content.len(),
            "Message received"
        );

        Ok(RawOutput::new(content, elapsed))
    }
}
