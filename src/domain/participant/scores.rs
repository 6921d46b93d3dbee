//! Advisory category scores.
//!
//! Score feeds are loosely typed: category bags may carry unknown keys,
//! strings, or nothing at all. The policy here is fallback-to-zero: an
//! unknown, absent, or non-numeric entry reads as 0, never as an error.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// The enumerated advisory categories a participant is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    Retirement,
    Financial,
    Tax,
    Investment,
    Estate,
    Other,
}

impl ScoreCategory {
    /// All categories, in display order.
    pub const ALL: [ScoreCategory; 6] = [
        ScoreCategory::Retirement,
        ScoreCategory::Financial,
        ScoreCategory::Tax,
        ScoreCategory::Investment,
        ScoreCategory::Estate,
        ScoreCategory::Other,
    ];

    /// Parses a feed key. `adviceScore` is a legacy alias for `other`.
    pub fn parse_key(key: &str) -> Option<Self> {
        match key {
            "retirement" => Some(ScoreCategory::Retirement),
            "financial" => Some(ScoreCategory::Financial),
            "tax" => Some(ScoreCategory::Tax),
            "investment" => Some(ScoreCategory::Investment),
            "estate" => Some(ScoreCategory::Estate),
            "other" | "adviceScore" => Some(ScoreCategory::Other),
            _ => None,
        }
    }

    /// Wire key used when serializing.
    pub fn key(&self) -> &'static str {
        match self {
            ScoreCategory::Retirement => "retirement",
            ScoreCategory::Financial => "financial",
            ScoreCategory::Tax => "tax",
            ScoreCategory::Investment => "investment",
            ScoreCategory::Estate => "estate",
            ScoreCategory::Other => "other",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Retirement => "Retirement",
            ScoreCategory::Financial => "Financial",
            ScoreCategory::Tax => "Tax",
            ScoreCategory::Investment => "Investment",
            ScoreCategory::Estate => "Estate",
            ScoreCategory::Other => "Other",
        }
    }
}

/// Scores for one participant across the enumerated categories.
///
/// Scores are expected in `[0, 100]` but the feed does not guarantee it;
/// values are stored as received and read defensively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSet {
    scores: BTreeMap<ScoreCategory, f64>,
}

impl ScoreSet {
    /// Creates an empty score set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a category score. Non-finite values are dropped (read as 0).
    pub fn set(&mut self, category: ScoreCategory, value: f64) {
        if value.is_finite() {
            self.scores.insert(category, value);
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, category: ScoreCategory, value: f64) -> Self {
        self.set(category, value);
        self
    }

    /// Reads a category score, 0 when absent.
    pub fn get(&self, category: ScoreCategory) -> f64 {
        self.scores.get(&category).copied().unwrap_or(0.0)
    }

    /// Maximum score across all categories; 0 when every score is absent.
    pub fn highest(&self) -> f64 {
        ScoreCategory::ALL
            .iter()
            .map(|c| self.get(*c))
            .fold(0.0, f64::max)
    }

    /// True when no category carries a score.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Serialize for ScoreSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (category, value) in &self.scores {
            map.serialize_entry(category.key(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScoreSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScoreSetVisitor;

        impl<'de> Visitor<'de> for ScoreSetVisitor {
            type Value = ScoreSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of advisory category scores")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut set = ScoreSet::new();
                // Unknown keys and non-numeric values fall back to zero by
                // being skipped here.
                while let Some((key, value)) =
                    access.next_entry::<String, serde_json::Value>()?
                {
                    if let Some(category) = ScoreCategory::parse_key(&key) {
                        if let Some(number) = value.as_f64() {
                            set.set(category, number);
                        }
                    }
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ScoreSetVisitor)
    }
}

/// Display band for a score value, used for table coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Green,
    Yellow,
    Grey,
    Orange,
    Red,
}

impl ScoreBand {
    /// Bands a score: `>= 80` green, `>= 60` yellow, `>= 40` grey, `>= 20`
    /// orange, else red. Non-finite input bands red.
    pub fn from_score(value: f64) -> Self {
        if !value.is_finite() {
            ScoreBand::Red
        } else if value >= 80.0 {
            ScoreBand::Green
        } else if value >= 60.0 {
            ScoreBand::Yellow
        } else if value >= 40.0 {
            ScoreBand::Grey
        } else if value >= 20.0 {
            ScoreBand::Orange
        } else {
            ScoreBand::Red
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_picks_maximum_category_score() {
        let set = ScoreSet::new()
            .with(ScoreCategory::Retirement, 92.0)
            .with(ScoreCategory::Financial, 78.0)
            .with(ScoreCategory::Tax, 82.0)
            .with(ScoreCategory::Investment, 48.0)
            .with(ScoreCategory::Estate, 76.0);
        assert_eq!(set.highest(), 92.0);
    }

    #[test]
    fn highest_of_empty_set_is_zero() {
        assert_eq!(ScoreSet::new().highest(), 0.0);
    }

    #[test]
    fn non_numeric_entries_read_as_zero() {
        let json = r#"{
            "retirement": 92,
            "financial": 78,
            "tax": 82,
            "investment": 48,
            "estate": 76,
            "adviceScore": "not-a-number"
        }"#;
        let set: ScoreSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.get(ScoreCategory::Other), 0.0);
        assert_eq!(set.highest(), 92.0);
    }

    #[test]
    fn advice_score_key_aliases_other() {
        let set: ScoreSet = serde_json::from_str(r#"{"adviceScore": 14}"#).unwrap();
        assert_eq!(set.get(ScoreCategory::Other), 14.0);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let set: ScoreSet = serde_json::from_str(r#"{"astrology": 99, "tax": 50}"#).unwrap();
        assert_eq!(set.get(ScoreCategory::Tax), 50.0);
        assert_eq!(set.highest(), 50.0);
    }

    #[test]
    fn non_finite_values_are_dropped() {
        let mut set = ScoreSet::new();
        set.set(ScoreCategory::Tax, f64::NAN);
        set.set(ScoreCategory::Estate, f64::INFINITY);
        assert!(set.is_empty());
        assert_eq!(set.highest(), 0.0);
    }

    #[test]
    fn out_of_range_values_are_kept_as_received() {
        // The feed promises [0, 100] but nothing enforces it; readers band
        // defensively instead.
        let set = ScoreSet::new().with(ScoreCategory::Other, 140.0);
        assert_eq!(set.get(ScoreCategory::Other), 140.0);
    }

    #[test]
    fn serializes_with_wire_keys() {
        let set = ScoreSet::new().with(ScoreCategory::Retirement, 92.0);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["retirement"], serde_json::json!(92.0));
    }

    #[test]
    fn bands_follow_table_thresholds() {
        assert_eq!(ScoreBand::from_score(92.0), ScoreBand::Green);
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Green);
        assert_eq!(ScoreBand::from_score(78.0), ScoreBand::Yellow);
        assert_eq!(ScoreBand::from_score(48.0), ScoreBand::Grey);
        assert_eq!(ScoreBand::from_score(21.0), ScoreBand::Orange);
        assert_eq!(ScoreBand::from_score(14.0), ScoreBand::Red);
        assert_eq!(ScoreBand::from_score(f64::NAN), ScoreBand::Red);
    }
}
