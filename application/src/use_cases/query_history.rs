//! Query History use case.
//!
//! Pages through recorded triages and summarizes them, the read-only
//! counterpart of [`TriageFeedbackUseCase`](super::triage_feedback::TriageFeedbackUseCase).

use crate::ports::triage_history::{HistoryError, TriageHistory};
use std::sync::Arc;
use tracing::debug;
use triage_domain::{HistoryPage, HistoryQuery, TriageStats};

pub struct QueryHistoryUseCase {
    history: Arc<dyn TriageHistory>,
}

impl QueryHistoryUseCase {
    pub fn new(history: Arc<dyn TriageHistory>) -> Self {
        Self { history }
    }

    /// One filtered page, newest first.
    pub fn page(&self, query: &HistoryQuery) -> Result<HistoryPage, HistoryError> {
        let entries = self.history.entries()?;
        let page = query.apply(&entries);
        debug!(
            stored = entries.len(),
            matching = page.total,
            returned = page.entries.len(),
            "History page loaded"
        );
        Ok(page)
    }

    /// Totals, distributions and the most recent entries.
    pub fn stats(&self) -> Result<TriageStats, HistoryError> {
        let entries = self.history.entries()?;
        Ok(TriageStats::from_entries(&entries))
    }
}
