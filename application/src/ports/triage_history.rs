//! Port for reading back recorded triages.
//!
//! The read side of [`TriageRecorder`](super::triage_recorder::TriageRecorder):
//! adapters return every stored entry, newest first. Filtering, paging and
//! aggregation happen in the domain.

use thiserror::Error;
use triage_domain::HistoryEntry;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Could not read triage history {location}: {message}")]
    Unreadable { location: String, message: String },
}

/// Port for loading stored triage results.
pub trait TriageHistory: Send + Sync {
    /// All stored entries, newest first. Missing storage is an empty history.
    fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError>;
}
