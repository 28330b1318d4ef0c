//! Port for persisting completed triage results.
//!
//! Defines the [`TriageRecorder`] trait for handing each finished triage to
//! the persistence collaborator (a history file, a database table, ...).
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! human-readable diagnostics, while this port captures the result records
//! in a machine-readable form.

use triage_domain::TriageResult;

/// One completed triage, ready for storage.
#[derive(Debug, Clone)]
pub struct TriageRecord {
    /// Cleaned text that was sent to the provider
    pub feedback_text: String,
    pub result: TriageResult,
}

impl TriageRecord {
    pub fn new(feedback_text: impl Into<String>, result: TriageResult) -> Self {
        Self {
            feedback_text: feedback_text.into(),
            result,
        }
    }
}

/// Port for recording completed triage results.
///
/// The `record` method is synchronous and non-fallible so storage trouble
/// never turns a successful triage into a failure; implementations log and
/// swallow their own errors.
pub trait TriageRecorder: Send + Sync {
    fn record(&self, record: &TriageRecord);
}

/// No-op implementation for tests and when history is disabled.
pub struct NoTriageRecorder;

impl TriageRecorder for NoTriageRecorder {
    fn record(&self, _record: &TriageRecord) {}
}
