//! Prompt domain
//!
//! Templates for the classification requests sent to providers.

mod template;

pub use template::TriagePromptTemplate;
