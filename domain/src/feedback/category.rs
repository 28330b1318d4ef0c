//! Feedback category value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed set of feedback categories (Value Object)
///
/// Every [`TriageResult`](crate::TriageResult) carries exactly one of these.
/// Serialized as its display label (e.g. `"Bug Report"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    BugReport,
    FeatureRequest,
    Praise,
    #[default]
    GeneralInquiry,
    Complaint,
}

impl Category {
    /// All categories, in the order they are presented to providers.
    pub const ALL: [Category; 5] = [
        Category::BugReport,
        Category::FeatureRequest,
        Category::Praise,
        Category::GeneralInquiry,
        Category::Complaint,
    ];

    /// Canonical display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BugReport => "Bug Report",
            Category::FeatureRequest => "Feature Request",
            Category::Praise => "Praise/Positive Feedback",
            Category::GeneralInquiry => "General Inquiry",
            Category::Complaint => "Complaint",
        }
    }

    /// One-line description used in classification prompts.
    pub fn description(&self) -> &'static str {
        match self {
            Category::BugReport => "Identifies a technical issue or something that is broken",
            Category::FeatureRequest => "Suggests a new feature or enhancement",
            Category::Praise => "Expresses satisfaction or appreciation",
            Category::GeneralInquiry => "Questions or comments that don't fit other categories",
            Category::Complaint => "Expresses dissatisfaction with the product or service",
        }
    }

    /// Resolve a provider-supplied category string.
    ///
    /// Case-insensitive and tolerant of separators (`bug_report`,
    /// `feature-request`) and short forms (`praise`, `inquiry`). Anything
    /// unrecognised maps to [`Category::GeneralInquiry`].
    pub fn resolve(raw: &str) -> Category {
        Self::match_loose(raw).unwrap_or(Category::GeneralInquiry)
    }

    /// Loose match without the fallback, used when scanning free text.
    pub(crate) fn match_loose(raw: &str) -> Option<Category> {
        if let Ok(exact) = raw.parse::<Category>() {
            return Some(exact);
        }

        let key: String = raw
            .trim()
            .trim_matches(|c: char| c == '"' || c == '\'' || c == '.')
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "bugreport" | "bug" => Some(Category::BugReport),
            "featurerequest" | "feature" => Some(Category::FeatureRequest),
            "praisepositivefeedback" | "praise" | "positivefeedback" | "positive" => {
                Some(Category::Praise)
            }
            "generalinquiry" | "inquiry" | "general" | "question" => {
                Some(Category::GeneralInquiry)
            }
            "complaint" => Some(Category::Complaint),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the category labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    /// Strict parse: the display label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
