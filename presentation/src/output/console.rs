//! Console output formatter for triage results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use triage_domain::util::preview;
use triage_domain::{TriageResult, UrgencyScore};

/// Formats triage results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Globally enable or disable ANSI colors (`output.color = false`).
    pub fn set_color_enabled(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    pub(crate) fn urgency(score: UrgencyScore) -> ColoredString {
        let text = format!("{}/5 ({})", score.value(), score.label());
        match score.value() {
            1 | 2 => text.green(),
            3 => text.yellow(),
            4 => text.red(),
            _ => text.red().bold(),
        }
    }

    fn row(label: &str, value: impl std::fmt::Display) -> String {
        format!("{:>12} {}\n", format!("{label}:").cyan().bold(), value)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, feedback_text: &str, result: &TriageResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::row("Feedback", preview(feedback_text, 120)));
        output.push_str(&Self::row("Category", result.category.as_str().bold()));
        output.push_str(&Self::row("Urgency", Self::urgency(result.urgency_score)));

        if let Some(confidence) = result.confidence_score {
            output.push_str(&Self::row(
                "Confidence",
                format!("{:.0}%", confidence * 100.0),
            ));
        }

        if !result.reasoning.is_empty() {
            output.push_str(&Self::row("Reasoning", &result.reasoning));
        }

        if let Some(provider) = &result.provider_name {
            let timing = result
                .processing_time
                .map(|t| format!(" in {:.2}s", t))
                .unwrap_or_default();
            output.push_str(&Self::row("Provider", format!("{provider}{timing}").dimmed()));
        }

        output
    }
}
