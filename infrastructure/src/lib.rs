//! Infrastructure layer for feedback-triage
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: LLM provider clients, configuration file
//! loading, and the triage history file.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileHistoryConfig, FileOutputConfig, FileTriageConfig};
pub use logging::{JsonlTriageHistory, JsonlTriageRecorder};
pub use providers::{AnthropicClassifier, ChatCompletionsClassifier, ProviderSetupError, build_classifier};
