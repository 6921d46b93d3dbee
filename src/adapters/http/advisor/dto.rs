//! HTTP DTOs for advisor endpoints.

use serde::{Deserialize, Serialize};

/// Banner profile: email plus the derived CommsID.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorProfileView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub comms_id: String,
}

/// Request body for advanced advice.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAdviceRequest {
    pub financial_details: String,
}

/// Generated advice text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceView {
    pub text: String,
}
