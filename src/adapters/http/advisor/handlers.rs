//! HTTP handlers for advisor endpoints.

use axum::extract::State;
use axum::Json;

use crate::application::handlers::GenerateAdviceCommand;

use super::super::auth::AuthenticatedUser;
use super::super::response::ApiError;
use super::super::state::AppState;
use super::dto::{AdviceView, AdvisorProfileView, GenerateAdviceRequest};

/// GET /api/advisor/profile
pub async fn get_advisor_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<AdvisorProfileView>, ApiError> {
    let profile = state
        .get_advisor_profile_handler()
        .handle(&user.user_id)
        .await?;

    Ok(Json(AdvisorProfileView {
        email: profile.email,
        comms_id: profile.comms_id.to_string(),
    }))
}

/// POST /api/advisor/advice
pub async fn generate_advice(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(body): Json<GenerateAdviceRequest>,
) -> Result<Json<AdviceView>, ApiError> {
    let text = state
        .generate_advice_handler()
        .handle(GenerateAdviceCommand {
            user_id: user.user_id,
            financial_details: body.financial_details,
        })
        .await?;

    Ok(Json(AdviceView { text }))
}
