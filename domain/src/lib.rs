//! Domain layer for feedback-triage
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Category**: closed enumeration every result belongs to
//! - **UrgencyScore**: 1 (not urgent) to 5 (critical)
//! - **Normalization**: provider output of any shape becomes a valid
//!   [`TriageResult`]; ambiguity resolves to safe defaults, never to errors

pub mod config;
pub mod feedback;
pub mod history;
pub mod prompt;
pub mod providers;
pub mod triage;
pub mod util;

// Re-export commonly used types
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use feedback::{
    category::{Category, UnknownCategory},
    result::{TriageResponse, TriageResult},
    submission::FeedbackSubmission,
    urgency::UrgencyScore,
    validation::{SubmissionValidator, ValidationError, ValidationIssue, clean_text},
};
pub use history::{
    HistoryEntry,
    query::{HistoryPage, HistoryQuery},
    stats::TriageStats,
};
pub use prompt::TriagePromptTemplate;
pub use providers::{
    AnthropicProviderConfig, AzureOpenAiProviderConfig, GroqProviderConfig, OpenAiProviderConfig,
    ProviderConfig, ProviderKind, UnknownProvider,
};
pub use triage::{normalizer::ResponseNormalizer, phase::TriagePhase};
