//! Filtering and pagination over history entries

use super::HistoryEntry;
use crate::feedback::category::Category;
use crate::feedback::urgency::UrgencyScore;
use serde::Serialize;

/// Page size when none is given.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Which slice of history to show.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryQuery {
    pub limit: usize,
    pub offset: usize,
    pub category: Option<Category>,
    pub urgency: Option<UrgencyScore>,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
            category: None,
            urgency: None,
        }
    }
}

impl HistoryQuery {
    fn matches(&self, entry: &HistoryEntry) -> bool {
        self.category.is_none_or(|c| entry.category == c)
            && self.urgency.is_none_or(|u| entry.urgency_score == u)
    }

    /// Filter `newest_first`, then cut out the requested page.
    ///
    /// `total` counts every matching entry, not just the page.
    pub fn apply(&self, newest_first: &[HistoryEntry]) -> HistoryPage {
        let matching: Vec<&HistoryEntry> =
            newest_first.iter().filter(|e| self.matches(e)).collect();
        let total = matching.len();
        let entries = matching
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .cloned()
            .collect();

        HistoryPage {
            entries,
            total,
            limit: self.limit,
            offset: self.offset,
            has_more: self.offset.saturating_add(self.limit) < total,
        }
    }
}

/// One page of history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPage {
    pub entries: Vec<HistoryEntry>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}
