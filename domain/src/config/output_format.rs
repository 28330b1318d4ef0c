//! Output format value object

use serde::{Deserialize, Serialize};

/// How triage results are rendered for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary (default)
    #[default]
    Text,
    /// The JSON wire response
    Json,
}
