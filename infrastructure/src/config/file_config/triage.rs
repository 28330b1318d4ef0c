//! Triage settings from TOML (`[triage]` section)

use serde::{Deserialize, Serialize};
use triage_application::TriageParams;
use triage_domain::SubmissionValidator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTriageConfig {
    /// Hard bound on one provider call.
    pub timeout_seconds: u64,
    /// Minimum cleaned text length in characters.
    pub min_length: usize,
    /// Maximum cleaned text length in characters.
    pub max_length: usize,
}

impl Default for FileTriageConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            min_length: 10,
            max_length: 1000,
        }
    }
}

impl FileTriageConfig {
    pub fn to_params(&self) -> TriageParams {
        TriageParams::from_timeout_seconds(self.timeout_seconds)
    }

    pub fn to_validator(&self) -> SubmissionValidator {
        SubmissionValidator::new(self.min_length, self.max_length)
    }
}
