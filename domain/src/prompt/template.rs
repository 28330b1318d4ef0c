//! Prompt templates for feedback classification

use crate::feedback::category::Category;
use crate::feedback::urgency::UrgencyScore;

/// Templates for generating classification prompts
pub struct TriagePromptTemplate;

impl TriagePromptTemplate {
    /// System prompt shared by every provider
    pub fn system() -> &'static str {
        "You are a feedback analysis agent that returns only valid JSON."
    }

    /// Full classification prompt: the provider picks category and urgency.
    pub fn classify(text: &str) -> String {
        format!(
            r#"You are a feedback analysis agent. Your job is to analyze user feedback and classify it into a category and an urgency level.

CATEGORIES:
{categories}

URGENCY SCALE (1-5):
{urgency}

EXAMPLES:
- "I can't log in, the password reset link is broken. I need my files for a client meeting!" -> Bug Report, urgency 4, confidence 0.95
- "Could you add a dark mode feature?" -> Feature Request, urgency 2, confidence 0.98
- "The app is amazing! Load time is so much faster now." -> Praise/Positive Feedback, urgency 1, confidence 0.99
- "How do I export my data to CSV?" -> General Inquiry, urgency 2, confidence 0.92
- "Support never answered my ticket and I was billed twice." -> Complaint, urgency 3, confidence 0.9

Respond with ONLY valid JSON:

{{
  "category": "one of the categories above, spelled exactly",
  "urgency_score": 1-5,
  "reasoning": "brief explanation of your decision",
  "confidence_score": 0.0-1.0
}}

Feedback to analyze:
{text}
"#,
            categories = Self::category_list(),
            urgency = Self::urgency_scale(),
            text = text
        )
    }

    /// Urgency-only prompt: the category was chosen by the user and is pinned.
    pub fn classify_with_category(text: &str, category: Category) -> String {
        format!(
            r#"You are analyzing feedback urgency. The category "{category}" has been manually selected and must not be changed.
Analyze ONLY the urgency level (1-5) for this feedback.

URGENCY SCALE (1-5):
{urgency}

Respond with ONLY valid JSON:

{{
  "category": "{category}",
  "urgency_score": 1-5,
  "reasoning": "brief explanation of the urgency level",
  "confidence_score": 0.0-1.0
}}

Feedback to analyze:
{text}
"#,
            category = category,
            urgency = Self::urgency_scale(),
            text = text
        )
    }

    /// Pick the right prompt for an optional manual category.
    pub fn for_submission(text: &str, manual_category: Option<Category>) -> String {
        match manual_category {
            Some(category) => Self::classify_with_category(text, category),
            None => Self::classify(text),
        }
    }

    fn category_list() -> String {
        Category::ALL
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}. {}: {}", i + 1, c.as_str(), c.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn urgency_scale() -> String {
        (UrgencyScore::MIN..=UrgencyScore::MAX)
            .filter_map(UrgencyScore::new)
            .map(|u| format!("{}: {} - {}", u.value(), u.label(), urgency_hint(u)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn urgency_hint(score: UrgencyScore) -> &'static str {
    match score.value() {
        1 => "Minor issues, general questions, positive feedback",
        2 => "Small improvements, non-critical issues",
        3 => "Moderate impact, affects some users",
        4 => "Significant impact, affects many users, time-sensitive",
        _ => "Severe issues, blocks core functionality, urgent business need",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prompt_lists_every_category() {
        let prompt = TriagePromptTemplate::classify("Test feedback");
        assert!(prompt.contains("Test feedback"));
        for category in Category::ALL {
            assert!(prompt.contains(category.as_str()), "missing {category}");
        }
        assert!(prompt.contains("urgency_score"));
        assert!(prompt.contains("5: Critical"));
    }

    #[test]
    fn test_pinned_category_prompt() {
        let prompt =
            TriagePromptTemplate::classify_with_category("Dark mode please", Category::FeatureRequest);
        assert!(prompt.contains(r#""category": "Feature Request""#));
        assert!(prompt.contains("ONLY the urgency"));
        assert!(prompt.contains("Dark mode please"));
    }

    #[test]
    fn test_for_submission_dispatch() {
        let auto = TriagePromptTemplate::for_submission("x", None);
        let pinned = TriagePromptTemplate::for_submission("x", Some(Category::Complaint));
        assert!(auto.contains("CATEGORIES:"));
        assert!(!pinned.contains("CATEGORIES:"));
        assert!(pinned.contains("Complaint"));
    }
}
