//! Triage result value objects

use super::category::Category;
use super::urgency::UrgencyScore;
use serde::{Deserialize, Serialize};

/// Canonical outcome of triaging one submission.
///
/// `category` and `urgency_score` are always valid; the optional fields are
/// filled in as the result travels back through the coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    pub category: Category,
    pub urgency_score: UrgencyScore,
    /// Provider self-reported confidence in `[0, 1]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    /// Wall-clock seconds spent on the provider call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reasoning: String,
}

impl TriageResult {
    pub fn new(category: Category, urgency_score: UrgencyScore) -> Self {
        Self {
            category,
            urgency_score,
            confidence_score: None,
            processing_time: None,
            provider_name: None,
            reasoning: String::new(),
        }
    }

    pub fn with_confidence(mut self, confidence: Option<f64>) -> Self {
        self.confidence_score = confidence
            .filter(|c| c.is_finite())
            .map(|c| c.clamp(0.0, 1.0));
        self
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    /// Stamp the provider that produced this result and how long it took.
    pub fn stamped(mut self, provider_name: impl Into<String>, seconds: f64) -> Self {
        self.provider_name = Some(provider_name.into());
        self.processing_time = Some(seconds);
        self
    }
}

/// Wire response shape returned to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResponse {
    pub feedback_text: String,
    pub category: Category,
    pub urgency_score: UrgencyScore,
}

impl TriageResponse {
    pub fn new(feedback_text: impl Into<String>, result: &TriageResult) -> Self {
        Self {
            feedback_text: feedback_text.into(),
            category: result.category,
            urgency_score: result.urgency_score,
        }
    }
}
