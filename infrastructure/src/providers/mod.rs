//! LLM provider adapters.
//!
//! Each adapter implements the [`FeedbackClassifier`](triage_application::FeedbackClassifier)
//! port for one vendor:
//!
//! | Provider | Adapter | Endpoint |
//! |----------|---------|----------|
//! | `openai` | [`ChatCompletionsClassifier::openai`] | `{base_url}/v1/chat/completions` |
//! | `groq` | [`ChatCompletionsClassifier::groq`] | `{base_url}/openai/v1/chat/completions` |
//! | `azure_openai` | [`ChatCompletionsClassifier::azure_openai`] | `{endpoint}/openai/deployments/{deployment}/chat/completions` |
//! | `anthropic` | [`AnthropicClassifier`] | `{base_url}/v1/messages` |

mod anthropic;
mod azure;
mod chat_completions;
mod factory;
mod groq;
mod http;
mod openai;

pub use anthropic::AnthropicClassifier;
pub use chat_completions::ChatCompletionsClassifier;
pub use factory::{ProviderSetupError, build_classifier};
