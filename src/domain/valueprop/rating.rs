//! Quality rating for value proposition text.
//!
//! The rating is a pure function of character count against absolute
//! thresholds. It is deliberately independent of the display cap so that a
//! UI change to the cap never reclassifies saved text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Character count below which text rates [`PromptRating::Poor`].
pub const OK_THRESHOLD: usize = 50;

/// Character count at which text rates [`PromptRating::Good`].
pub const GOOD_THRESHOLD: usize = 150;

/// Three-tier descriptive completeness rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRating {
    Poor,
    Ok,
    Good,
}

impl PromptRating {
    /// Rates text by character count: `< 50` Poor, `50..150` Ok, `>= 150` Good.
    pub fn from_len(len: usize) -> Self {
        if len < OK_THRESHOLD {
            PromptRating::Poor
        } else if len < GOOD_THRESHOLD {
            PromptRating::Ok
        } else {
            PromptRating::Good
        }
    }

    /// Rates a text by its character count.
    pub fn for_text(text: &str) -> Self {
        Self::from_len(text.chars().count())
    }

    /// User-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            PromptRating::Poor => "Value Prop is too short!",
            PromptRating::Ok => "Value Prop is ok!",
            PromptRating::Good => "Value Prop is great!",
        }
    }
}

impl fmt::Display for PromptRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PromptRating::Poor => "poor",
            PromptRating::Ok => "ok",
            PromptRating::Good => "good",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundary_values_rate_per_canonical_rule() {
        assert_eq!(PromptRating::from_len(0), PromptRating::Poor);
        assert_eq!(PromptRating::from_len(49), PromptRating::Poor);
        assert_eq!(PromptRating::from_len(50), PromptRating::Ok);
        assert_eq!(PromptRating::from_len(149), PromptRating::Ok);
        assert_eq!(PromptRating::from_len(150), PromptRating::Good);
        assert_eq!(PromptRating::from_len(10_000), PromptRating::Good);
    }

    #[test]
    fn for_text_counts_chars_not_bytes() {
        let text = "é".repeat(150);
        assert_eq!(PromptRating::for_text(&text), PromptRating::Good);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(PromptRating::Poor < PromptRating::Ok);
        assert!(PromptRating::Ok < PromptRating::Good);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PromptRating::Good).unwrap(), "\"good\"");
        assert_eq!(serde_json::to_string(&PromptRating::Poor).unwrap(), "\"poor\"");
    }

    proptest! {
        #[test]
        fn rating_is_monotonic_in_length(len in 0usize..1000) {
            prop_assert!(PromptRating::from_len(len) <= PromptRating::from_len(len + 1));
        }

        #[test]
        fn rating_is_deterministic(len in 0usize..1000) {
            prop_assert_eq!(PromptRating::from_len(len), PromptRating::from_len(len));
        }
    }
}
