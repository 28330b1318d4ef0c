//! Configuration file loading for feedback-triage
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRIAGE_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./triage.toml` or `./.triage.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/feedback-triage/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_PROVIDER_ENV, FileAnthropicConfig, FileAzureOpenAiConfig, FileConfig,
    FileGroqConfig, FileHistoryConfig, FileOpenAiConfig, FileOutputConfig, FileProvidersConfig,
    FileTriageConfig, GENERIC_API_KEY_ENV,
};
pub use loader::ConfigLoader;
