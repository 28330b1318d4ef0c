//! Aggregate statistics over triage history

use super::HistoryEntry;
use crate::feedback::category::Category;
use crate::feedback::urgency::UrgencyScore;
use serde::Serialize;
use std::collections::BTreeMap;

/// How many of the newest entries a summary carries.
pub const RECENT_ENTRIES: usize = 10;

/// Totals and distributions across all recorded triages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageStats {
    pub total_feedback: usize,
    /// Count per category label; categories never seen are absent.
    pub categories: BTreeMap<String, usize>,
    /// Count per urgency score; scores never seen are absent.
    pub urgency_distribution: BTreeMap<u8, usize>,
    /// Mean over entries that carry a processing time.
    pub avg_processing_time: Option<f64>,
    pub recent_feedback: Vec<HistoryEntry>,
}

impl TriageStats {
    pub fn from_entries(newest_first: &[HistoryEntry]) -> Self {
        let mut categories = BTreeMap::new();
        let mut urgency_distribution = BTreeMap::new();
        let mut timed = 0usize;
        let mut time_sum = 0.0;

        for entry in newest_first {
            *categories
                .entry(entry.category.as_str().to_string())
                .or_insert(0) += 1;
            *urgency_distribution
                .entry(entry.urgency_score.value())
                .or_insert(0) += 1;
            if let Some(t) = entry.processing_time.filter(|t| t.is_finite()) {
                timed += 1;
                time_sum += t;
            }
        }

        Self {
            total_feedback: newest_first.len(),
            categories,
            urgency_distribution,
            avg_processing_time: (timed > 0).then(|| time_sum / timed as f64),
            recent_feedback: newest_first.iter().take(RECENT_ENTRIES).cloned().collect(),
        }
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.categories.get(category.as_str()).copied().unwrap_or(0)
    }

    pub fn urgency_count(&self, score: UrgencyScore) -> usize {
        self.urgency_distribution
            .get(&score.value())
            .copied()
            .unwrap_or(0)
    }
}
