//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.). They are built once at
//! startup and never mutated.

use thiserror::Error;

/// Supported classification backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Anthropic,
    AzureOpenAi,
    Groq,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAi,
        ProviderKind::Anthropic,
        ProviderKind::AzureOpenAi,
        ProviderKind::Groq,
    ];

    /// Configuration name, also stamped on results as `provider_name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::AzureOpenAi => "azure_openai",
            ProviderKind::Groq => "groq",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported provider '{0}' (expected one of: openai, anthropic, azure_openai, groq)")]
pub struct UnknownProvider(pub String);

impl std::str::FromStr for ProviderKind {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "azure_openai" | "azure-openai" | "azure" => Ok(ProviderKind::AzureOpenAi),
            "groq" => Ok(ProviderKind::Groq),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

/// Top-level provider configuration.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Active provider.
    pub active: ProviderKind,
    pub openai: OpenAiProviderConfig,
    pub anthropic: AnthropicProviderConfig,
    pub azure_openai: AzureOpenAiProviderConfig,
    pub groq: GroqProviderConfig,
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone)]
pub struct OpenAiProviderConfig {
    /// Resolved API key (from config or environment).
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for OpenAiProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4".to_string(),
            max_tokens: 300,
        }
    }
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone)]
pub struct AnthropicProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for AnthropicProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-3-sonnet-20240229".to_string(),
            max_tokens: 300,
            api_version: "2023-06-01".to_string(),
        }
    }
}

/// Azure OpenAI provider configuration.
///
/// Azure addresses models by deployment rather than model name.
#[derive(Debug, Clone)]
pub struct AzureOpenAiProviderConfig {
    pub api_key: Option<String>,
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`.
    pub endpoint: Option<String>,
    pub deployment: Option<String>,
    pub api_version: String,
    pub max_tokens: u32,
}

impl Default for AzureOpenAiProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            deployment: None,
            api_version: "2024-02-01".to_string(),
            max_tokens: 300,
        }
    }
}

/// Groq provider configuration (OpenAI-compatible API).
#[derive(Debug, Clone)]
pub struct GroqProviderConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for GroqProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.groq.com".to_string(),
            model: "llama3-8b-8192".to_string(),
            max_tokens: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_roundtrip() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.as_str().parse::<ProviderKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_provider_kind_aliases() {
        assert_eq!("Azure".parse::<ProviderKind>(), Ok(ProviderKind::AzureOpenAi));
        assert_eq!(" OPENAI ".parse::<ProviderKind>(), Ok(ProviderKind::OpenAi));
    }

    #[test]
    fn test_unknown_provider() {
        let err = "bedrock".parse::<ProviderKind>().unwrap_err();
        assert_eq!(err, UnknownProvider("bedrock".to_string()));
        assert!(err.to_string().contains("groq"));
    }
}
