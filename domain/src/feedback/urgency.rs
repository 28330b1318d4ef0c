//! Urgency score value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Urgency on a 1 (not urgent) to 5 (critical) scale.
///
/// The inner value is always within `[1, 5]`; every constructor clamps or
/// rejects out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UrgencyScore(u8);

impl UrgencyScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const NOT_URGENT: UrgencyScore = UrgencyScore(1);
    pub const LOW: UrgencyScore = UrgencyScore(2);
    pub const MEDIUM: UrgencyScore = UrgencyScore(3);
    pub const HIGH: UrgencyScore = UrgencyScore(4);
    pub const CRITICAL: UrgencyScore = UrgencyScore(5);

    /// Returns `None` when `value` is outside `[1, 5]`.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(UrgencyScore(value))
    }

    /// Clamp any integer into range.
    pub fn clamped(value: i64) -> Self {
        UrgencyScore(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Map a word label (`"High"`, `"not urgent"`, ...) to a score.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label
            .trim()
            .trim_matches(|c: char| !c.is_ascii_alphanumeric())
            .to_ascii_lowercase()
            .replace(['_', '-'], " ");

        match normalized.split_whitespace().collect::<Vec<_>>().join(" ").as_str() {
            "not urgent" => Some(Self::NOT_URGENT),
            "low" => Some(Self::LOW),
            "medium" => Some(Self::MEDIUM),
            "high" => Some(Self::HIGH),
            "critical" => Some(Self::CRITICAL),
            _ => None,
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Word label for this score.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Not Urgent",
            2 => "Low",
            3 => "Medium",
            4 => "High",
            _ => "Critical",
        }
    }
}

impl Default for UrgencyScore {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl std::fmt::Display for UrgencyScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for UrgencyScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for UrgencyScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Ok(UrgencyScore::clamped(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(UrgencyScore::new(0), None);
        assert_eq!(UrgencyScore::new(6), None);
        assert_eq!(UrgencyScore::new(4), Some(UrgencyScore::HIGH));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(UrgencyScore::clamped(-3), UrgencyScore::NOT_URGENT);
        assert_eq!(UrgencyScore::clamped(42), UrgencyScore::CRITICAL);
        assert_eq!(UrgencyScore::clamped(2).value(), 2);
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(UrgencyScore::from_label("High"), Some(UrgencyScore::HIGH));
        assert_eq!(UrgencyScore::from_label("CRITICAL"), Some(UrgencyScore::CRITICAL));
        assert_eq!(UrgencyScore::from_label("not urgent"), Some(UrgencyScore::NOT_URGENT));
        assert_eq!(UrgencyScore::from_label("Not_Urgent"), Some(UrgencyScore::NOT_URGENT));
        assert_eq!(UrgencyScore::from_label(" medium. "), Some(UrgencyScore::MEDIUM));
        assert_eq!(UrgencyScore::from_label("soonish"), None);
    }

    #[test]
    fn test_label_matches_from_label() {
        for value in 1..=5 {
            let score = UrgencyScore::new(value).unwrap();
            assert_eq!(UrgencyScore::from_label(score.label()), Some(score));
        }
    }

    #[test]
    fn test_deserialize_clamps() {
        let score: UrgencyScore = serde_json::from_str("9").unwrap();
        assert_eq!(score, UrgencyScore::CRITICAL);
        assert_eq!(serde_json::to_string(&UrgencyScore::LOW).unwrap(), "2");
    }
}
