//! Triage parameters for use case call control.
//!
//! [`TriageParams`] groups the static parameters that bound a single
//! provider call in [`TriageFeedbackUseCase`](crate::use_cases::triage_feedback::TriageFeedbackUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Call control parameters, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageParams {
    /// Hard upper bound on one provider call, network included.
    pub timeout: Duration,
}

impl Default for TriageParams {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

impl TriageParams {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Creates params from a timeout in seconds; zero keeps the default.
    pub fn from_timeout_seconds(seconds: u64) -> Self {
        if seconds == 0 {
            return Self::default();
        }
        Self::default().with_timeout(Duration::from_secs(seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        assert_eq!(TriageParams::default().timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_from_timeout_seconds() {
        assert_eq!(
            TriageParams::from_timeout_seconds(3).timeout,
            Duration::from_secs(3)
        );
        assert_eq!(TriageParams::from_timeout_seconds(0), TriageParams::default());
    }
}
