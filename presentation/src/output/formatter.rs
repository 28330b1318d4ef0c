//! Output formatter trait

use crate::output::console::ConsoleFormatter;
use triage_domain::{OutputFormat, TriageResponse, TriageResult};

/// Trait for rendering a completed triage
pub trait OutputFormatter {
    /// Render the result of triaging `feedback_text`
    fn format(&self, feedback_text: &str, result: &TriageResult) -> String;
}

/// JSON rendering of the wire response
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, feedback_text: &str, result: &TriageResult) -> String {
        let response = TriageResponse::new(feedback_text, result);
        serde_json::to_string_pretty(&response).unwrap_or_else(|e| {
            format!("{{\"error\": \"could not serialize response: {}\"}}", e)
        })
    }
}

/// Pick the formatter for an output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_domain::{Category, UrgencyScore};

    #[test]
    fn test_json_formatter_emits_wire_response() {
        let result = TriageResult::new(Category::BugReport, UrgencyScore::HIGH)
            .with_reasoning("crash")
            .stamped("openai", 0.5);
        let output = formatter_for(OutputFormat::Json)
            .format("The app crashes when I try to upload files", &result);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "feedback_text": "The app crashes when I try to upload files",
                "category": "Bug Report",
                "urgency_score": 4
            })
        );
    }
}
