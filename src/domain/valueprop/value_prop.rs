//! Value proposition aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

use super::PromptRating;

/// Display cap enforced by the editor. Advisory only: the rating rule never
/// reads it.
pub const MAX_DISPLAY_CHARS: usize = 250;

/// One free-text service pitch per advisor.
///
/// Saves overwrite the previous text in full; no history is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueProposition {
    user_id: UserId,
    text: String,
}

impl ValueProposition {
    /// Creates a value proposition for an advisor. Empty text is valid: a new
    /// advisor starts with nothing written.
    pub fn new(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            text: text.into(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character count shown against [`MAX_DISPLAY_CHARS`] in the editor.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Current quality rating, recomputed from the text on every call.
    pub fn rating(&self) -> PromptRating {
        PromptRating::for_text(&self.text)
    }

    /// Replaces the text in full.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
