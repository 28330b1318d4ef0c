//! Feedback submission entity

use super::category::Category;

/// A single piece of user feedback awaiting triage.
///
/// Constructed through [`SubmissionValidator`](super::validation::SubmissionValidator),
/// so the text is already cleaned and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    text: String,
    manual_category: Option<Category>,
}

impl FeedbackSubmission {
    pub(crate) fn new(text: String, manual_category: Option<Category>) -> Self {
        Self {
            text,
            manual_category,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caller-chosen category that overrides whatever the provider infers.
    pub fn manual_category(&self) -> Option<Category> {
        self.manual_category
    }
}
