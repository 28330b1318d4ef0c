//! Provider output normalization.
//!
//! Turns whatever text a provider returned into a valid [`TriageResult`].
//! This is pure domain logic: no I/O, just JSON extraction and text pattern
//! matching. It never fails; ambiguity resolves to safe defaults.
//!
//! | Field | Source | Fallback |
//! |-------|--------|----------|
//! | category | manual override, then `category` key, then free text | General Inquiry |
//! | urgency | `urgency_score` / `urgency` / `priority` key, then free text | 3 (Medium) |
//! | confidence | `confidence_score` / `confidence` key | none |

use crate::feedback::category::Category;
use crate::feedback::result::TriageResult;
use crate::feedback::urgency::UrgencyScore;
use serde_json::{Map, Value};

const URGENCY_KEYS: [&str; 3] = ["urgency_score", "urgency", "priority"];
const CONFIDENCE_KEYS: [&str; 2] = ["confidence_score", "confidence"];
/// Free-text anchors that introduce an urgency value.
const URGENCY_KEYWORDS: [&str; 2] = ["urgency", "priority"];
const URGENCY_LABELS: [(&str, UrgencyScore); 5] = [
    ("not urgent", UrgencyScore::NOT_URGENT),
    ("low", UrgencyScore::LOW),
    ("medium", UrgencyScore::MEDIUM),
    ("high", UrgencyScore::HIGH),
    ("critical", UrgencyScore::CRITICAL),
];

/// Normalizes raw provider output into a canonical result.
pub struct ResponseNormalizer;

impl ResponseNormalizer {
    /// Normalize `raw` provider output.
    ///
    /// When `manual_category` is given it always wins over the provider's
    /// category.
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_domain::{Category, ResponseNormalizer, UrgencyScore};
    ///
    /// let r = ResponseNormalizer::normalize(r#"{"category": "Bug Report", "urgency_score": "High"}"#, None);
    /// assert_eq!(r.category, Category::BugReport);
    /// assert_eq!(r.urgency_score, UrgencyScore::HIGH);
    ///
    /// let r = ResponseNormalizer::normalize("no idea", Some(Category::Complaint));
    /// assert_eq!(r.category, Category::Complaint);
    /// assert_eq!(r.urgency_score, UrgencyScore::MEDIUM);
    /// ```
    pub fn normalize(raw: &str, manual_category: Option<Category>) -> TriageResult {
        match extract_json_object(raw) {
            Some(object) => normalize_object(&object, raw, manual_category),
            None => normalize_free_text(raw, manual_category),
        }
    }
}

fn normalize_object(
    object: &Map<String, Value>,
    raw: &str,
    manual_category: Option<Category>,
) -> TriageResult {
    let category = manual_category.unwrap_or_else(|| {
        object
            .get("category")
            .and_then(Value::as_str)
            .map(Category::resolve)
            .unwrap_or_else(|| category_from_text(raw))
    });

    let urgency = URGENCY_KEYS
        .iter()
        .find_map(|key| object.get(*key))
        .and_then(urgency_from_value)
        .unwrap_or_default();

    let confidence = CONFIDENCE_KEYS
        .iter()
        .find_map(|key| object.get(*key))
        .and_then(confidence_from_value);

    let reasoning = object
        .get("reasoning")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim();

    TriageResult::new(category, urgency)
        .with_confidence(confidence)
        .with_reasoning(reasoning)
}

fn normalize_free_text(raw: &str, manual_category: Option<Category>) -> TriageResult {
    let category = manual_category.unwrap_or_else(|| category_from_text(raw));
    let urgency = urgency_from_text(raw).unwrap_or_default();
    TriageResult::new(category, urgency)
}

/// Find the outermost JSON object in a response, tolerating markdown fences
/// and surrounding prose.
fn extract_json_object(raw: &str) -> Option<Map<String, Value>> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    match serde_json::from_str::<Value>(&raw[start..=end]) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn urgency_from_value(value: &Value) -> Option<UrgencyScore> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(rounded))
            .map(UrgencyScore::clamped),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Some(n) = trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(rounded))
            {
                return Some(UrgencyScore::clamped(n));
            }
            UrgencyScore::from_label(trimmed).or_else(|| urgency_from_text(trimmed))
        }
        _ => None,
    }
}

fn rounded(f: f64) -> Option<i64> {
    f.is_finite().then(|| f.round() as i64)
}

fn confidence_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Search free text for an urgency indicator.
///
/// Recognises, in order: a number or label in the clause after an
/// "urgency" or "priority" keyword, then `N/5` anywhere, then the earliest
/// word label in the text.
fn urgency_from_text(text: &str) -> Option<UrgencyScore> {
    let lower = text.to_ascii_lowercase();

    let mut anchors: Vec<usize> = URGENCY_KEYWORDS
        .iter()
        .flat_map(|key| lower.match_indices(key).map(|(pos, key)| pos + key.len()))
        .collect();
    anchors.sort_unstable();
    if let Some(score) = anchors
        .into_iter()
        .find_map(|anchor| urgency_in_clause(clause_after(&lower, anchor)))
    {
        return Some(score);
    }

    for word in lower.split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '/');
        if let Some(num_str) = word.strip_suffix("/5")
            && let Ok(num) = num_str.parse::<i64>()
        {
            return Some(UrgencyScore::clamped(num));
        }
    }

    earliest_urgency_label(&lower).map(|(_, score)| score)
}

/// Search free text for a category; General Inquiry when none found.
///
/// A label in the clause after a "category" keyword wins; otherwise the
/// label appearing first in the text.
fn category_from_text(text: &str) -> Category {
    let lower = text.to_ascii_lowercase();
    lower
        .match_indices("category")
        .find_map(|(pos, key)| earliest_category(clause_after(&lower, pos + key.len())))
        .or_else(|| earliest_category(&lower))
        .unwrap_or(Category::GeneralInquiry)
}

/// Text from `start` up to the end of its clause (`,`, `;`, newline, or a
/// full stop that is not a decimal point).
fn clause_after(lower: &str, start: usize) -> &str {
    let rest = &lower[start..];
    let mut chars = rest.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let ends = match c {
            ',' | ';' | '\n' => true,
            '.' => !chars.peek().is_some_and(|(_, next)| next.is_ascii_digit()),
            _ => false,
        };
        if ends {
            return &rest[..i];
        }
    }
    rest
}

/// Whichever comes first in the clause: a number or a word label.
fn urgency_in_clause(clause: &str) -> Option<UrgencyScore> {
    let number = first_number(clause);
    let label = earliest_urgency_label(clause);
    match (number, label) {
        (Some((num_pos, num)), Some((label_pos, score))) => Some(if num_pos < label_pos {
            UrgencyScore::clamped(num)
        } else {
            score
        }),
        (Some((_, num)), None) => Some(UrgencyScore::clamped(num)),
        (None, Some((_, score))) => Some(score),
        (None, None) => None,
    }
}

/// Position and rounded value of the first number in `text`.
fn first_number(text: &str) -> Option<(usize, i64)> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let number: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let value = number.trim_end_matches('.').parse::<f64>().ok().and_then(rounded)?;
    Some((start, value))
}

fn earliest_urgency_label(text: &str) -> Option<(usize, UrgencyScore)> {
    URGENCY_LABELS
        .iter()
        .filter_map(|(label, score)| find_word(text, label).map(|pos| (pos, *score)))
        .min_by_key(|(pos, _)| *pos)
}

fn earliest_category(text: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .flat_map(|category| {
            let label = category.as_str().to_ascii_lowercase();
            let short = match category {
                Category::Praise => Some("praise"),
                _ => None,
            };
            [find_word(text, &label), short.and_then(|s| find_word(text, s))]
                .into_iter()
                .flatten()
                .map(move |pos| (pos, category))
        })
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, category)| category)
}

/// Byte position of `word` in `haystack` where it is not part of a longer word.
fn find_word(haystack: &str, word: &str) -> Option<usize> {
    haystack.match_indices(word).map(|(pos, _)| pos).find(|&pos| {
        let before = haystack[..pos].chars().next_back();
        let after = haystack[pos + word.len()..].chars().next();
        !before.is_some_and(|c| c.is_ascii_alphanumeric())
            && !after.is_some_and(|c| c.is_ascii_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(raw: &str) -> TriageResult {
        ResponseNormalizer::normalize(raw, None)
    }

    // ==================== JSON output ====================

    #[test]
    fn test_well_formed_json() {
        let r = normalize(
            r#"{"category": "Bug Report", "urgency_score": 4, "reasoning": "Login issue", "confidence_score": 0.95}"#,
        );
        assert_eq!(r.category, Category::BugReport);
        assert_eq!(r.urgency_score, UrgencyScore::HIGH);
        assert_eq!(r.reasoning, "Login issue");
        assert_eq!(r.confidence_score, Some(0.95));
    }

    #[test]
    fn test_upload_crash_example() {
        let r = normalize(r#"{"category": "Bug Report", "urgency": "High"}"#);
        assert_eq!(r.category, Category::BugReport);
        assert_eq!(r.urgency_score.value(), 4);
    }

    #[test]
    fn test_json_inside_markdown_fence() {
        let raw = r#"
Here is the analysis:
```json
{"category": "feature request", "urgency_score": 2}
```
"#;
        let r = normalize(raw);
        assert_eq!(r.category, Category::FeatureRequest);
        assert_eq!(r.urgency_score, UrgencyScore::LOW);
    }

    #[test]
    fn test_word_labels_case_insensitive() {
        for (label, expected) in [("High", 4), ("CRITICAL", 5), ("not urgent", 1), ("Low", 2)] {
            let raw = format!(r#"{{"category": "Complaint", "urgency_score": "{}"}}"#, label);
            assert_eq!(normalize(&raw).urgency_score.value(), expected, "label {label}");
        }
    }

    #[test]
    fn test_numeric_urgency_is_clamped() {
        assert_eq!(normalize(r#"{"urgency_score": 11}"#).urgency_score.value(), 5);
        assert_eq!(normalize(r#"{"urgency_score": -2}"#).urgency_score.value(), 1);
        assert_eq!(normalize(r#"{"urgency_score": 0}"#).urgency_score.value(), 1);
        assert_eq!(normalize(r#"{"urgency_score": 3.6}"#).urgency_score.value(), 4);
        assert_eq!(normalize(r#"{"urgency_score": "2"}"#).urgency_score.value(), 2);
    }

    #[test]
    fn test_decimal_string_urgency_is_rounded() {
        let r = normalize(r#"{"category": "Bug Report", "urgency_score": "4.6"}"#);
        assert_eq!(r.urgency_score, UrgencyScore::CRITICAL);
        assert_eq!(normalize(r#"{"urgency_score": " 1.2 "}"#).urgency_score.value(), 1);
        assert_eq!(normalize(r#"{"urgency_score": "NaN"}"#).urgency_score, UrgencyScore::MEDIUM);
    }

    #[test]
    fn test_urgency_embedded_in_string_value() {
        let r = normalize(r#"{"category": "Bug Report", "urgency_score": "I'd say 4/5"}"#);
        assert_eq!(r.urgency_score.value(), 4);
    }

    #[test]
    fn test_unparseable_urgency_defaults_to_medium() {
        for raw in [
            r#"{"category": "Bug Report", "urgency_score": "soon-ish"}"#,
            r#"{"category": "Bug Report", "urgency_score": null}"#,
            r#"{"category": "Bug Report", "urgency_score": [1, 2]}"#,
            r#"{"category": "Bug Report"}"#,
        ] {
            assert_eq!(normalize(raw).urgency_score, UrgencyScore::MEDIUM, "{raw}");
        }
    }

    #[test]
    fn test_unknown_category_maps_to_general_inquiry() {
        let r = normalize(r#"{"category": "Security Incident", "urgency_score": 5}"#);
        assert_eq!(r.category, Category::GeneralInquiry);
        assert_eq!(r.urgency_score, UrgencyScore::CRITICAL);
    }

    #[test]
    fn test_non_string_category_maps_to_general_inquiry() {
        let r = normalize(r#"{"category": 7, "urgency_score": 2}"#);
        assert_eq!(r.category, Category::GeneralInquiry);
    }

    #[test]
    fn test_confidence_aliases_and_strings() {
        assert_eq!(normalize(r#"{"confidence": "0.5"}"#).confidence_score, Some(0.5));
        assert_eq!(normalize(r#"{"confidence_score": 3}"#).confidence_score, Some(1.0));
        assert_eq!(normalize(r#"{"confidence_score": "sure"}"#).confidence_score, None);
    }

    // ==================== Manual override ====================

    #[test]
    fn test_manual_category_overrides_provider() {
        let r = ResponseNormalizer::normalize(
            r#"{"category": "Bug Report", "urgency_score": 4}"#,
            Some(Category::FeatureRequest),
        );
        assert_eq!(r.category, Category::FeatureRequest);
        assert_eq!(r.urgency_score, UrgencyScore::HIGH);
    }

    #[test]
    fn test_manual_category_survives_garbage() {
        let r = ResponseNormalizer::normalize("<<<>>>", Some(Category::Praise));
        assert_eq!(r.category, Category::Praise);
        assert_eq!(r.urgency_score, UrgencyScore::MEDIUM);
    }

    // ==================== Free text ====================

    #[test]
    fn test_free_text_with_label_and_category() {
        let r = normalize("Category: Bug Report. Urgency: Critical, the app loses data.");
        assert_eq!(r.category, Category::BugReport);
        assert_eq!(r.urgency_score, UrgencyScore::CRITICAL);
    }

    #[test]
    fn test_free_text_numeric_urgency() {
        assert_eq!(normalize("urgency: 2").urgency_score.value(), 2);
        assert_eq!(normalize("Priority 5 - fix now").urgency_score.value(), 5);
        assert_eq!(normalize("I rate it 1/5").urgency_score.value(), 1);
    }

    #[test]
    fn test_free_text_not_urgent() {
        let r = normalize("This is praise/positive feedback and not urgent at all");
        assert_eq!(r.category, Category::Praise);
        assert_eq!(r.urgency_score, UrgencyScore::NOT_URGENT);
    }

    #[test]
    fn test_category_keyword_beats_later_mentions() {
        let r = normalize("Category: Feature Request. This is not a bug report.");
        assert_eq!(r.category, Category::FeatureRequest);

        let r = normalize("Sounds like a complaint to me, but category is Bug Report");
        assert_eq!(r.category, Category::BugReport);
    }

    #[test]
    fn test_urgency_keyword_beats_later_labels() {
        let r = normalize("Category: Complaint. Urgency: Low. Not a critical issue.");
        assert_eq!(r.category, Category::Complaint);
        assert_eq!(r.urgency_score, UrgencyScore::LOW);

        let r = normalize("Critical path is fine. Priority: medium");
        assert_eq!(r.urgency_score, UrgencyScore::MEDIUM);

        assert_eq!(normalize("urgency level 4.6 overall").urgency_score.value(), 5);
    }

    #[test]
    fn test_without_keywords_earliest_mention_wins() {
        let r = normalize("Low impact, though high visibility for a feature request or complaint");
        assert_eq!(r.urgency_score, UrgencyScore::LOW);
        assert_eq!(r.category, Category::FeatureRequest);

        // "low" inside another word is not a label
        assert_eq!(normalize("Please allow exports. High").urgency_score, UrgencyScore::HIGH);
    }

    #[test]
    fn test_empty_output_defaults() {
        let r = normalize("");
        assert_eq!(r.category, Category::GeneralInquiry);
        assert_eq!(r.urgency_score, UrgencyScore::MEDIUM);
        assert!(r.reasoning.is_empty());
    }

    #[test]
    fn test_broken_json_falls_back_to_text_scan() {
        let r = normalize(r#"{"category": "Complaint", "urgency_score": 4"#);
        assert_eq!(r.category, Category::Complaint);
        assert_eq!(r.urgency_score.value(), 4);
    }

    #[test]
    fn test_invariants_hold_for_arbitrary_inputs() {
        let inputs = [
            "}{",
            "{}",
            "null",
            "[1,2,3]",
            r#"{"urgency_score": 1e308}"#,
            r#"{"urgency_score": -1e308}"#,
            "urgency: 99999999999999999999",
            "high low medium critical",
        ];
        for raw in inputs {
            let r = normalize(raw);
            assert!(Category::ALL.contains(&r.category), "{raw}");
            assert!((1..=5).contains(&r.urgency_score.value()), "{raw}");
        }
    }
}
