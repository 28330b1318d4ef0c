//! Rendering for `history` and `stats`

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use serde::Serialize;
use triage_domain::util::preview;
use triage_domain::{Category, HistoryEntry, HistoryPage, OutputFormat, TriageStats, UrgencyScore};

const TEXT_PREVIEW: usize = 60;

/// Render a page of history.
pub fn render_history(page: &HistoryPage, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(page),
        OutputFormat::Text => history_text(page),
    }
}

/// Render history statistics.
pub fn render_stats(stats: &TriageStats, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(stats),
        OutputFormat::Text => stats_text(stats),
    }
}

fn to_json(value: &impl Serialize) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"could not serialize history: {}\"}}", e))
}

fn entry_line(entry: &HistoryEntry) -> String {
    let when = entry.created_at.get(..19).unwrap_or(&entry.created_at);
    format!(
        "{}  {:<24}  {:<16}  {}\n",
        when.dimmed(),
        entry.category.as_str(),
        ConsoleFormatter::urgency(entry.urgency_score),
        preview(&entry.feedback_text, TEXT_PREVIEW)
    )
}

fn history_text(page: &HistoryPage) -> String {
    if page.total == 0 {
        return "No triage history recorded yet.\n".to_string();
    }

    let mut output = String::new();
    for entry in &page.entries {
        output.push_str(&entry_line(entry));
    }

    let shown = page.entries.len();
    let first = if shown == 0 { 0 } else { page.offset + 1 };
    output.push_str(&format!(
        "{}\n",
        format!("Showing {}-{} of {}", first, page.offset + shown, page.total).dimmed()
    ));
    if page.has_more {
        output.push_str(&format!(
            "{}\n",
            format!("More with --offset {}", page.offset + page.limit).dimmed()
        ));
    }
    output
}

fn stats_text(stats: &TriageStats) -> String {
    let mut output = String::new();
    let heading = |title: &str| format!("{}\n", title.cyan().bold());

    output.push_str(&format!(
        "{} {}\n",
        "Total feedback:".cyan().bold(),
        stats.total_feedback
    ));
    if let Some(avg) = stats.avg_processing_time {
        output.push_str(&format!(
            "{} {:.2}s\n",
            "Average processing time:".cyan().bold(),
            avg
        ));
    }
    if stats.total_feedback == 0 {
        return output;
    }

    output.push_str(&heading("\nBy category"));
    for category in Category::ALL {
        let count = stats.category_count(category);
        if count > 0 {
            output.push_str(&format!("  {:<26} {}\n", category.as_str(), count));
        }
    }

    output.push_str(&heading("\nBy urgency"));
    for value in (UrgencyScore::MIN..=UrgencyScore::MAX).rev() {
        let score = UrgencyScore::clamped(value as i64);
        let count = stats.urgency_count(score);
        if count > 0 {
            output.push_str(&format!("  {:<26} {}\n", ConsoleFormatter::urgency(score), count));
        }
    }

    output.push_str(&heading("\nRecent"));
    for entry in &stats.recent_feedback {
        output.push_str("  ");
        output.push_str(&entry_line(entry));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_domain::HistoryQuery;

    fn entries() -> Vec<HistoryEntry> {
        let mut crash =
            HistoryEntry::new("The app crashes on upload", Category::BugReport, UrgencyScore::CRITICAL)
                .with_processing_time(2.0);
        crash.created_at = "2026-03-01T10:15:00.000Z".to_string();
        vec![
            crash,
            HistoryEntry::new("Add a dark mode", Category::FeatureRequest, UrgencyScore::LOW),
            HistoryEntry::new("Billing page is slow", Category::Complaint, UrgencyScore::MEDIUM),
        ]
    }

    #[test]
    fn test_history_text_lists_entries_and_paging() {
        colored::control::set_override(false);
        let query = HistoryQuery {
            limit: 2,
            ..Default::default()
        };
        let output = render_history(&query.apply(&entries()), OutputFormat::Text);

        assert!(output.contains("2026-03-01T10:15:00"));
        assert!(output.contains("The app crashes on upload"));
        assert!(output.contains("5/5 (Critical)"));
        assert!(!output.contains("Billing page is slow"));
        assert!(output.contains("Showing 1-2 of 3"));
        assert!(output.contains("--offset 2"));
    }

    #[test]
    fn test_empty_history_text() {
        let page = HistoryQuery::default().apply(&[]);
        assert!(render_history(&page, OutputFormat::Text).contains("No triage history"));
    }

    #[test]
    fn test_history_json_has_paging_fields() {
        let page = HistoryQuery::default().apply(&entries());
        let value: serde_json::Value =
            serde_json::from_str(&render_history(&page, OutputFormat::Json)).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["has_more"], false);
        assert_eq!(value["entries"][1]["category"], "Feature Request");
    }

    #[test]
    fn test_stats_text_shows_distributions() {
        colored::control::set_override(false);
        let output = render_stats(&TriageStats::from_entries(&entries()), OutputFormat::Text);

        assert!(output.contains("Total feedback: 3"));
        assert!(output.contains("Average processing time: 2.00s"));
        assert!(output.contains("Feature Request"));
        assert!(output.contains("2/5 (Low)"));
        assert!(!output.contains("Praise"));
    }

    #[test]
    fn test_stats_json() {
        let output = render_stats(&TriageStats::from_entries(&entries()), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total_feedback"], 3);
        assert_eq!(value["categories"]["Complaint"], 1);
        assert_eq!(value["recent_feedback"].as_array().unwrap().len(), 3);
    }
}
