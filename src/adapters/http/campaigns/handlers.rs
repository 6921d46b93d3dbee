//! HTTP handlers for campaign endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::handlers::{
    CreateCampaignCommand, DeleteCampaignCommand, EditCampaignMessageCommand,
};
use crate::domain::campaign::{Campaign, CampaignDraft};
use crate::domain::foundation::{CampaignId, ParticipantId, PlanId};

use super::super::auth::AuthenticatedUser;
use super::super::response::ApiError;
use super::super::state::AppState;
use super::dto::{CreateCampaignRequest, UpdateMessageRequest};

/// GET /api/campaigns/scenarios
pub async fn list_scenarios(_user: AuthenticatedUser) -> Json<Vec<&'static str>> {
    Json(crate::domain::campaign::PARTICIPANT_SCENARIOS.to_vec())
}

/// GET /api/campaigns
pub async fn list_campaigns(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Campaign>>, ApiError> {
    let campaigns = state.list_campaigns_handler().handle(&user.user_id).await?;
    Ok(Json(campaigns))
}

/// POST /api/campaigns
pub async fn create_campaign(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(body): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<Campaign>), ApiError> {
    // Empty selections from the form read as absent; the draft validation
    // reports what is actually missing.
    let plan_id = body
        .plan_id
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(PlanId::new)
        .transpose()
        .map_err(|_| ApiError::bad_request("Invalid plan identifier"))?;
    let participant_id = body
        .participant_id
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(ParticipantId::new)
        .transpose()
        .map_err(|_| ApiError::bad_request("Invalid participant identifier"))?;

    let result = state
        .create_campaign_handler()
        .handle(CreateCampaignCommand {
            user_id: user.user_id,
            draft: CampaignDraft {
                name: body.name,
                plan_id,
                participant_id,
                scenario: body.scenario,
                message_content: body.message_content,
            },
        })
        .await?;

    Ok((StatusCode::CREATED, Json(result.campaign)))
}

/// PUT /api/campaigns/:campaign_id/message
pub async fn update_campaign_message(
    State(state): State<AppState>,
    Path(campaign_id_str): Path<String>,
    user: AuthenticatedUser,
    Json(body): Json<UpdateMessageRequest>,
) -> Result<Json<Campaign>, ApiError> {
    let campaign_id: CampaignId = campaign_id_str
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid campaign ID format"))?;

    let campaign = state
        .edit_campaign_message_handler()
        .handle(EditCampaignMessageCommand {
            user_id: user.user_id,
            campaign_id,
            message: body.message,
        })
        .await?;

    Ok(Json(campaign))
}

/// DELETE /api/campaigns/:campaign_id
pub async fn delete_campaign(
    State(state): State<AppState>,
    Path(campaign_id_str): Path<String>,
    user: AuthenticatedUser,
) -> Result<StatusCode, ApiError> {
    let campaign_id: CampaignId = campaign_id_str
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid campaign ID format"))?;

    state
        .delete_campaign_handler()
        .handle(DeleteCampaignCommand {
            user_id: user.user_id,
            campaign_id,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
