//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};
use triage_domain::{
    AnthropicProviderConfig, AzureOpenAiProviderConfig, GroqProviderConfig, OpenAiProviderConfig,
    ProviderConfig, ProviderKind,
};

/// Shared key consulted by OpenAI and Anthropic before their own variable.
pub const GENERIC_API_KEY_ENV: &str = "LLM_API_KEY";

/// Shared model override for OpenAI and Anthropic.
pub const GENERIC_MODEL_ENV: &str = "LLM_MODEL";

/// Model override for Groq.
pub const GROQ_MODEL_ENV: &str = "GROQ_MODEL";

/// Environment variable naming the active provider when `default` is unset.
pub const DEFAULT_PROVIDER_ENV: &str = "DEFAULT_LLM_PROVIDER";

/// Whether a provider accepts [`GENERIC_API_KEY_ENV`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GenericKey {
    /// Generic key first, then the provider's own variable.
    Preferred,
    /// Only the provider's own variable.
    Ignored,
}

/// Resolve an API key. A literal value in the file always wins; the
/// environment lookup order then depends on `generic`.
pub(crate) fn resolve_api_key(
    literal: Option<&str>,
    env_name: &str,
    generic: GenericKey,
) -> Option<String> {
    let generic_key = || match generic {
        GenericKey::Preferred => env_value(GENERIC_API_KEY_ENV),
        GenericKey::Ignored => None,
    };
    non_empty(literal.map(str::to_string))
        .or_else(generic_key)
        .or_else(|| env_value(env_name))
}

/// Resolve a setting the file may leave at its built-in default: a value
/// changed in the file wins, then `env_name`, then the default.
fn unless_default(file_value: &str, default: &str, env_name: &str) -> String {
    if file_value != default {
        return file_value.to_string();
    }
    env_value(env_name).unwrap_or_else(|| file_value.to_string())
}

fn env_value(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    non_empty(std::env::var(name).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        let defaults = OpenAiProviderConfig::default();
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: defaults.base_url,
            model: defaults.model,
            max_tokens: defaults.max_tokens,
        }
    }
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        let defaults = AnthropicProviderConfig::default();
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: defaults.base_url,
            model: defaults.model,
            max_tokens: defaults.max_tokens,
            api_version: defaults.api_version,
        }
    }
}

/// Azure OpenAI provider configuration.
///
/// `endpoint` and `deployment` fall back to `AZURE_OPENAI_ENDPOINT` and
/// `AZURE_OPENAI_DEPLOYMENT` when not set in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAzureOpenAiConfig {
    /// Environment variable name for the API key (default: "AZURE_OPENAI_API_KEY").
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub deployment: Option<String>,
    pub api_version: String,
    pub max_tokens: u32,
}

impl Default for FileAzureOpenAiConfig {
    fn default() -> Self {
        let defaults = AzureOpenAiProviderConfig::default();
        Self {
            api_key_env: "AZURE_OPENAI_API_KEY".to_string(),
            api_key: None,
            endpoint: None,
            deployment: None,
            api_version: defaults.api_version,
            max_tokens: defaults.max_tokens,
        }
    }
}

/// Groq provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGroqConfig {
    /// Environment variable name for the API key (default: "GROQ_API_KEY").
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for FileGroqConfig {
    fn default() -> Self {
        let defaults = GroqProviderConfig::default();
        Self {
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            base_url: defaults.base_url,
            model: defaults.model,
            max_tokens: defaults.max_tokens,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Active provider: "openai", "anthropic", "azure_openai", "groq".
    pub default: Option<String>,
    pub openai: FileOpenAiConfig,
    pub anthropic: FileAnthropicConfig,
    pub azure_openai: FileAzureOpenAiConfig,
    pub groq: FileGroqConfig,
}

impl FileProvidersConfig {
    /// Name of the active provider as configured, consulting
    /// [`DEFAULT_PROVIDER_ENV`] when the file leaves it unset.
    pub fn active_name(&self) -> Option<String> {
        non_empty(self.default.clone()).or_else(|| env_value(DEFAULT_PROVIDER_ENV))
    }

    /// Parse the active provider. Unset means OpenAI.
    pub fn active(&self) -> Result<ProviderKind, triage_domain::UnknownProvider> {
        match self.active_name() {
            Some(name) => name.parse(),
            None => Ok(ProviderKind::default()),
        }
    }

    /// Convert to the domain configuration, resolving keys from the
    /// environment. An unknown provider falls back to the default; callers
    /// reject it earlier through [`FileConfig::validate`](super::FileConfig::validate).
    pub fn to_provider_config(&self) -> ProviderConfig {
        let openai_defaults = OpenAiProviderConfig::default();
        let anthropic_defaults = AnthropicProviderConfig::default();
        let azure_defaults = AzureOpenAiProviderConfig::default();
        let groq_defaults = GroqProviderConfig::default();

        ProviderConfig {
            active: self.active().unwrap_or_default(),
            openai: OpenAiProviderConfig {
                api_key: resolve_api_key(
                    self.openai.api_key.as_deref(),
                    &self.openai.api_key_env,
                    GenericKey::Preferred,
                ),
                base_url: self.openai.base_url.clone(),
                model: unless_default(&self.openai.model, &openai_defaults.model, GENERIC_MODEL_ENV),
                max_tokens: self.openai.max_tokens,
            },
            anthropic: AnthropicProviderConfig {
                api_key: resolve_api_key(
                    self.anthropic.api_key.as_deref(),
                    &self.anthropic.api_key_env,
                    GenericKey::Preferred,
                ),
                base_url: self.anthropic.base_url.clone(),
                model: unless_default(
                    &self.anthropic.model,
                    &anthropic_defaults.model,
                    GENERIC_MODEL_ENV,
                ),
                max_tokens: self.anthropic.max_tokens,
                api_version: self.anthropic.api_version.clone(),
            },
            azure_openai: AzureOpenAiProviderConfig {
                api_key: resolve_api_key(
                    self.azure_openai.api_key.as_deref(),
                    &self.azure_openai.api_key_env,
                    GenericKey::Ignored,
                ),
                endpoint: non_empty(self.azure_openai.endpoint.clone())
                    .or_else(|| env_value("AZURE_OPENAI_ENDPOINT")),
                deployment: non_empty(self.azure_openai.deployment.clone())
                    .or_else(|| env_value("AZURE_OPENAI_DEPLOYMENT")),
                api_version: unless_default(
                    &self.azure_openai.api_version,
                    &azure_defaults.api_version,
                    "AZURE_OPENAI_API_VERSION",
                ),
                max_tokens: self.azure_openai.max_tokens,
            },
            groq: GroqProviderConfig {
                api_key: resolve_api_key(
                    self.groq.api_key.as_deref(),
                    &self.groq.api_key_env,
                    GenericKey::Ignored,
                ),
                base_url: self.groq.base_url.clone(),
                model: unless_default(&self.groq.model, &groq_defaults.model, GROQ_MODEL_ENV),
                max_tokens: self.groq.max_tokens,
            },
        }
    }

    /// `(provider, base_url)` pairs for URL validation.
    pub(crate) fn base_urls(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("openai", Some(self.openai.base_url.as_str())),
            ("anthropic", Some(self.anthropic.base_url.as_str())),
            ("azure_openai", self.azure_openai.endpoint.as_deref()),
            ("groq", Some(self.groq.base_url.as_str())),
        ]
    }
}
