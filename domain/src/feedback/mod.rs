//! Feedback subdomain: what users submit and what triage produces.
//!
//! - [`category::Category`]: the closed category enumeration
//! - [`urgency::UrgencyScore`]: 1 to 5 urgency scale
//! - [`submission::FeedbackSubmission`]: validated input
//! - [`result::TriageResult`] / [`result::TriageResponse`]: canonical output and wire shape
//! - [`validation::SubmissionValidator`]: calling-layer input validation

pub mod category;
pub mod result;
pub mod submission;
pub mod urgency;
pub mod validation;
