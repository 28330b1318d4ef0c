//! Feedback classifier port
//!
//! Defines the interface for asking an external LLM provider to classify
//! feedback. Implementations (one per vendor) live in the infrastructure layer.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use triage_domain::Category;

/// Coarse classification of provider failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    Timeout,
    AuthFailure,
    RateLimited,
    NetworkError,
    MalformedRequest,
}

/// Errors that can occur while calling a provider.
///
/// Only transport, auth, and timeout failures are errors. A response that
/// arrived but has an unexpected shape is handed to the normalizer instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Authentication failed: {0}")]
    AuthFailure(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl ProviderError {
    pub fn kind(&self) -> ProviderErrorKind {
        match self {
            ProviderError::Timeout(_) => ProviderErrorKind::Timeout,
            ProviderError::AuthFailure(_) => ProviderErrorKind::AuthFailure,
            ProviderError::RateLimited(_) => ProviderErrorKind::RateLimited,
            ProviderError::NetworkError(_) => ProviderErrorKind::NetworkError,
            ProviderError::MalformedRequest(_) => ProviderErrorKind::MalformedRequest,
        }
    }
}

/// Raw provider answer before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOutput {
    /// Text content the model produced (usually JSON-shaped)
    pub text: String,
    /// Wall-clock time of the provider call
    pub elapsed: Duration,
}

impl RawOutput {
    pub fn new(text: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            text: text.into(),
            elapsed,
        }
    }
}

/// Classifier for one external provider.
///
/// When `manual_category` is given the implementation pins it in the
/// request so the provider only has to judge urgency.
#[async_trait]
pub trait FeedbackClassifier: Send + Sync {
    /// Name stamped on results (`openai`, `anthropic`, ...)
    fn provider_name(&self) -> &str;

    /// Send the feedback to the provider and return its raw answer.
    async fn classify(
        &self,
        text: &str,
        manual_category: Option<Category>,
    ) -> Result<RawOutput, ProviderError>;
}
