//! HTTP DTOs for campaign endpoints.
//!
//! Campaign records serialize directly; only request bodies are defined
//! here.

use serde::Deserialize;

/// Request body for campaign creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    #[serde(default)]
    pub name: String,
    pub plan_id: Option<String>,
    pub participant_id: Option<String>,
    #[serde(default)]
    pub scenario: String,
    #[serde(default)]
    pub message_content: String,
}

/// Request body for replacing a campaign's message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    pub message: String,
}
