//! Progress notification port
//!
//! Defines the interface for reporting triage lifecycle changes.

use triage_domain::TriagePhase;

/// Callback for lifecycle updates during a triage call.
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
pub trait TriageProgressNotifier: Send + Sync {
    /// Called on every phase transition.
    fn on_phase_change(&self, phase: TriagePhase, provider: &str);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl TriageProgressNotifier for NoProgress {
    fn on_phase_change(&self, _phase: TriagePhase, _provider: &str) {}
}
