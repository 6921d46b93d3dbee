//! HTTP DTOs for value proposition endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::valueprop::{PromptRating, ValueProposition, MAX_DISPLAY_CHARS};

/// Saved value proposition with editor metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuePropView {
    pub text: String,
    pub chars: usize,
    pub max_chars: usize,
    pub rating: PromptRating,
    pub rating_label: String,
}

impl From<ValueProposition> for ValuePropView {
    fn from(vp: ValueProposition) -> Self {
        let rating = vp.rating();
        Self {
            chars: vp.char_count(),
            max_chars: MAX_DISPLAY_CHARS,
            rating,
            rating_label: rating.label().to_string(),
            text: vp.text().to_string(),
        }
    }
}

/// Request body for saving the pitch text.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveValuePropRequest {
    pub text: String,
}

/// Request body for AI-assisted drafting.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateValuePropRequest {
    pub age_group: String,
    pub role: String,
    pub unique_description: String,
    #[serde(default)]
    pub ideal_client: Vec<String>,
}

/// A generated draft and its rating.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedValuePropView {
    pub text: String,
    pub rating: PromptRating,
}
