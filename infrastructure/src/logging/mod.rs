//! Triage history file.
//!
//! [`JsonlTriageRecorder`] appends one JSON line per completed triage,
//! implementing the [`TriageRecorder`](triage_application::TriageRecorder)
//! port. [`JsonlTriageHistory`] reads the same file back for the
//! [`TriageHistory`](triage_application::TriageHistory) port.

mod jsonl_history;
mod jsonl_recorder;

pub use jsonl_history::JsonlTriageHistory;
pub use jsonl_recorder::JsonlTriageRecorder;
