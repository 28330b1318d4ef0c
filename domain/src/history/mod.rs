//! Triage history: stored entries, paging, and aggregate statistics.
//!
//! Entries are always handled newest first; the storage adapter is
//! responsible for that ordering.

pub mod query;
pub mod stats;

use crate::feedback::category::Category;
use crate::feedback::urgency::UrgencyScore;
use serde::{Deserialize, Serialize};

/// One stored triage, as read back from history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub feedback_text: String,
    pub category: Category,
    pub urgency_score: UrgencyScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reasoning: String,
    /// RFC 3339 timestamp, empty if the line had none.
    #[serde(default)]
    pub created_at: String,
}

impl HistoryEntry {
    pub fn new(
        feedback_text: impl Into<String>,
        category: Category,
        urgency_score: UrgencyScore,
    ) -> Self {
        Self {
            feedback_text: feedback_text.into(),
            category,
            urgency_score,
            confidence_score: None,
            processing_time: None,
            provider: None,
            reasoning: String::new(),
            created_at: String::new(),
        }
    }

    pub fn with_processing_time(mut self, seconds: f64) -> Self {
        self.processing_time = Some(seconds);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_tolerates_missing_optional_fields() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"feedback_text": "Where is the export button?", "category": "General Inquiry", "urgency_score": 2}"#,
        )
        .unwrap();
        assert_eq!(entry.category, Category::GeneralInquiry);
        assert_eq!(entry.urgency_score, UrgencyScore::LOW);
        assert!(entry.provider.is_none());
        assert!(entry.created_at.is_empty());
    }

    #[test]
    fn test_entry_rejects_unknown_category() {
        let parsed = serde_json::from_str::<HistoryEntry>(
            r#"{"feedback_text": "x", "category": "Spam", "urgency_score": 2}"#,
        );
        assert!(parsed.is_err());
    }
}
