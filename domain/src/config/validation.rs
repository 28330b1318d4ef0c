//! Configuration issues detected at startup.
//!
//! Issues with [`Severity::Error`] are fatal: the process must not start
//! serving triage requests with them.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `providers.default` names no supported provider.
    UnknownProvider { value: String },
    /// `triage.timeout_seconds` is zero.
    ZeroTimeout,
    /// `triage.min_length` exceeds `triage.max_length`.
    InvalidLengthBounds { min: usize, max: usize },
    /// A non-default `base_url` that is not http(s).
    InvalidBaseUrl { provider: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Error
    }
}
