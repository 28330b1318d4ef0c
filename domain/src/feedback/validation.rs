//! Submission validation.
//!
//! The calling layer runs every raw request through [`SubmissionValidator`]
//! before it reaches the triage use case. Validation cleans the text
//! (entity decoding, tag stripping, whitespace collapsing) and enforces the
//! length bounds and the manual category enumeration.

use super::category::Category;
use super::submission::FeedbackSubmission;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("static tag pattern is valid"));

static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static whitespace pattern is valid"));

/// A single problem found in a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("Feedback text cannot be empty")]
    EmptyText,

    #[error("Feedback must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("Feedback must not exceed {max} characters")]
    TooLong { max: usize },

    #[error("Invalid category '{0}'. Must be one of: {list}", list = category_list())]
    InvalidCategory(String),
}

/// All problems found in a rejected submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Input validation failed: {}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn category_list() -> String {
    Category::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validates and cleans raw feedback input.
#[derive(Debug, Clone)]
pub struct SubmissionValidator {
    min_length: usize,
    max_length: usize,
}

impl Default for SubmissionValidator {
    fn default() -> Self {
        Self {
            min_length: 10,
            max_length: 1000,
        }
    }
}

impl SubmissionValidator {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// Validate raw text and an optional manual category.
    ///
    /// A blank `manual_category` is treated as absent. All issues are
    /// collected rather than stopping at the first.
    pub fn validate(
        &self,
        text: &str,
        manual_category: Option<&str>,
    ) -> Result<FeedbackSubmission, ValidationError> {
        let mut issues = Vec::new();

        let cleaned = clean_text(text);
        let length = cleaned.chars().count();
        if cleaned.is_empty() {
            issues.push(ValidationIssue::EmptyText);
        } else if length < self.min_length {
            issues.push(ValidationIssue::TooShort {
                min: self.min_length,
            });
        } else if length > self.max_length {
            issues.push(ValidationIssue::TooLong {
                max: self.max_length,
            });
        }

        let category = match manual_category.map(str::trim).filter(|c| !c.is_empty()) {
            None => None,
            Some(raw) => match raw.parse::<Category>() {
                Ok(category) => Some(category),
                Err(_) => {
                    issues.push(ValidationIssue::InvalidCategory(raw.to_string()));
                    None
                }
            },
        };

        if issues.is_empty() {
            Ok(FeedbackSubmission::new(cleaned, category))
        } else {
            Err(ValidationError { issues })
        }
    }
}

/// Normalize text: decode common HTML entities, strip tags, collapse
/// whitespace, and drop control characters.
pub fn clean_text(text: &str) -> String {
    let decoded = decode_entities(text);
    let untagged = TAG_PATTERN.replace_all(&decoded, "");
    let collapsed = WHITESPACE_PATTERN.replace_all(&untagged, " ");
    collapsed
        .trim()
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

fn decode_entities(text: &str) -> String {
    // &amp; last so "&amp;lt;" decodes to "&lt;" rather than "<"
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission() {
        let submission = SubmissionValidator::default()
            .validate("The app crashes when I try to upload files", None)
            .unwrap();
        assert_eq!(submission.text(), "The app crashes when I try to upload files");
        assert_eq!(submission.manual_category(), None);
    }

    #[test]
    fn test_manual_category_is_parsed() {
        let submission = SubmissionValidator::default()
            .validate("Please add a dark mode option", Some("feature request"))
            .unwrap();
        assert_eq!(submission.manual_category(), Some(Category::FeatureRequest));
    }

    #[test]
    fn test_blank_manual_category_is_ignored() {
        let submission = SubmissionValidator::default()
            .validate("Please add a dark mode option", Some("   "))
            .unwrap();
        assert_eq!(submission.manual_category(), None);
    }

    #[test]
    fn test_invalid_category_rejected() {
        let err = SubmissionValidator::default()
            .validate("Please add a dark mode option", Some("Spam"))
            .unwrap_err();
        assert_eq!(
            err.issues,
            vec![ValidationIssue::InvalidCategory("Spam".to_string())]
        );
        assert!(err.to_string().contains("Bug Report"));
    }

    #[test]
    fn test_empty_and_whitespace_rejected() {
        let err = SubmissionValidator::default().validate("  \n\t ", None).unwrap_err();
        assert_eq!(err.issues, vec![ValidationIssue::EmptyText]);

        let err = SubmissionValidator::default().validate("<p></p>", None).unwrap_err();
        assert_eq!(err.issues, vec![ValidationIssue::EmptyText]);
    }

    #[test]
    fn test_length_bounds() {
        let validator = SubmissionValidator::new(5, 20);
        assert_eq!(
            validator.validate("hey", None).unwrap_err().issues,
            vec![ValidationIssue::TooShort { min: 5 }]
        );
        assert_eq!(
            validator.validate(&"x".repeat(21), None).unwrap_err().issues,
            vec![ValidationIssue::TooLong { max: 20 }]
        );
        assert!(validator.validate(&"x".repeat(20), None).is_ok());
    }

    #[test]
    fn test_collects_multiple_issues() {
        let err = SubmissionValidator::default().validate("short", Some("nope")).unwrap_err();
        assert_eq!(err.issues.len(), 2);
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(
            clean_text("  <b>Login</b>   is\n\nbroken &amp; slow  "),
            "Login is broken & slow"
        );
        assert_eq!(clean_text("a\u{0}b c"), "ab c");
        assert_eq!(clean_text("&amp;lt;tag&amp;gt;"), "&lt;tag&gt;");
    }
}
