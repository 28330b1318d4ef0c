//! Triage lifecycle phases.

use serde::{Deserialize, Serialize};

/// Lifecycle of one triage call.
///
/// `Idle -> InFlight -> Completed | Failed`. There is no retry edge: a failed
/// call stays failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriagePhase {
    Idle,
    InFlight,
    Completed,
    Failed,
}

impl TriagePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriagePhase::Idle => "idle",
            TriagePhase::InFlight => "in_flight",
            TriagePhase::Completed => "completed",
            TriagePhase::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TriagePhase::Completed | TriagePhase::Failed)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: TriagePhase) -> bool {
        matches!(
            (self, next),
            (TriagePhase::Idle, TriagePhase::InFlight)
                | (TriagePhase::InFlight, TriagePhase::Completed)
                | (TriagePhase::InFlight, TriagePhase::Failed)
        )
    }
}

impl std::fmt::Display for TriagePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        assert!(!TriagePhase::Idle.is_terminal());
        assert!(!TriagePhase::InFlight.is_terminal());
        assert!(TriagePhase::Completed.is_terminal());
        assert!(TriagePhase::Failed.is_terminal());
    }

    #[test]
    fn test_transitions() {
        assert!(TriagePhase::Idle.can_transition_to(TriagePhase::InFlight));
        assert!(TriagePhase::InFlight.can_transition_to(TriagePhase::Completed));
        assert!(TriagePhase::InFlight.can_transition_to(TriagePhase::Failed));

        assert!(!TriagePhase::Idle.can_transition_to(TriagePhase::Completed));
        assert!(!TriagePhase::Failed.can_transition_to(TriagePhase::InFlight));
        assert!(!TriagePhase::Completed.can_transition_to(TriagePhase::Idle));
    }
}
