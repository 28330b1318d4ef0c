//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain and application
//! types at startup.

mod history;
mod output;
mod providers;
mod triage;

pub use history::FileHistoryConfig;
pub use output::FileOutputConfig;
pub use providers::{
    DEFAULT_PROVIDER_ENV, FileAnthropicConfig, FileAzureOpenAiConfig, FileGroqConfig,
    FileOpenAiConfig, FileProvidersConfig, GENERIC_API_KEY_ENV,
};
pub use triage::FileTriageConfig;

use serde::{Deserialize, Serialize};
use triage_domain::{ConfigIssue, ConfigIssueCode, ProviderKind};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider selection and credentials
    pub providers: FileProvidersConfig,
    /// Call control and input bounds
    pub triage: FileTriageConfig,
    /// Triage history file
    pub history: FileHistoryConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors are fatal at startup:
    /// 1. Unknown `providers.default`
    /// 2. Zero `triage.timeout_seconds`
    /// 3. `triage.min_length` greater than `triage.max_length`
    ///
    /// A base URL that is not http(s) is reported as a warning.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(name) = self.providers.active_name()
            && name.parse::<ProviderKind>().is_err()
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::UnknownProvider {
                    value: name.clone(),
                },
                format!(
                    "providers.default: unsupported provider '{}' (expected one of: {})",
                    name,
                    ProviderKind::ALL.map(|k| k.as_str()).join(", ")
                ),
            ));
        }

        if self.triage.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "triage.timeout_seconds cannot be 0",
            ));
        }

        if self.triage.min_length > self.triage.max_length {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidLengthBounds {
                    min: self.triage.min_length,
                    max: self.triage.max_length,
                },
                format!(
                    "triage.min_length ({}) is greater than triage.max_length ({})",
                    self.triage.min_length, self.triage.max_length
                ),
            ));
        }

        for (provider, url) in self.providers.base_urls() {
            if let Some(url) = url
                && !(url.starts_with("http://") || url.starts_with("https://"))
            {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidBaseUrl {
                        provider: provider.to_string(),
                        value: url.to_string(),
                    },
                    format!("providers.{}: '{}' is not an http(s) URL", provider, url),
                ));
            }
        }

        issues
    }
}
