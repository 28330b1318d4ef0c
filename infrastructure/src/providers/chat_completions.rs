//! OpenAI-compatible chat completions adapter.
//!
//! OpenAI, Groq and Azure OpenAI all speak the same request and response
//! shape; they differ only in URL, auth header and whether the model is
//! named in the body. Constructors for each vendor live in their own
//! modules.

use super::http::{self, TEMPERATURE};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;
use triage_application::{FeedbackClassifier, ProviderError, RawOutput};
use triage_domain::{Category, TriagePromptTemplate};

/// How the API key is sent.
#[derive(Debug, Clone)]
pub(crate) enum AuthHeader {
    /// `Authorization: Bearer <key>`
    Bearer(String),
    /// `api-key: <key>` (Azure)
    ApiKey(String),
}

/// Classifier for any chat completions endpoint.
pub struct ChatCompletionsClassifier {
    name: &'static str,
    client: reqwest::Client,
    url: String,
    auth: AuthHeader,
    /// `None` when the endpoint implies the model (Azure deployments).
    model: Option<String>,
    max_tokens: u32,
    timeout: Duration,
}

impl std::fmt::Debug for ChatCompletionsClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // auth deliberately omitted
        f.debug_struct("ChatCompletionsClassifier")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionsClassifier {
    pub(crate) fn new(
        name: &'static str,
        client: reqwest::Client,
        url: String,
        auth: AuthHeader,
        model: Option<String>,
        max_tokens: u32,
        timeout: Duration,
    ) -> Self {
        Self {
            name,
            client,
            url,
            auth,
            model,
            max_tokens,
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedbackClassifier for ChatCompletionsClassifier {
    fn provider_name(&self) -> &str {
        self.name
    }

    async fn classify(
        &self,
        text: &str,
        manual_category: Option<Category>,
    ) -> Result<RawOutput, ProviderError> {
        let prompt = TriagePromptTemplate::for_submission(text, manual_category);
        let body = ChatRequest {
            model: self.model.as_deref(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: TriagePromptTemplate::system(),
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: self.max_tokens,
        };

        let request = match &self.auth {
            AuthHeader::Bearer(key) => self.client.post(&self.url).bearer_auth(key),
            AuthHeader::ApiKey(key) => self.client.post(&self.url).header("api-key", key),
        };

        let started = Instant::now();
        let response: ChatResponse = http::post_json(request, &body, self.timeout).await?;
        let elapsed = started.elapsed();

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        debug!(
            provider = self.name,
            elapsed_ms = elapsed.as_millis() as u64,
            bytes = content.len(),
            "Chat completion received"
        );

        Ok(RawOutput::new(content, elapsed))
    }
}
