//! Application layer for feedback-triage
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::TriageParams;
pub use ports::{
    classifier::{FeedbackClassifier, ProviderError, ProviderErrorKind, RawOutput},
    progress::{NoProgress, TriageProgressNotifier},
    triage_history::{HistoryError, TriageHistory},
    triage_recorder::{NoTriageRecorder, TriageRecord, TriageRecorder},
};
pub use use_cases::query_history::QueryHistoryUseCase;
pub use use_cases::triage_feedback::{CoordinatorError, TriageFeedbackUseCase};
