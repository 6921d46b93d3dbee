//! HTTP handlers for value proposition endpoints.

use axum::extract::State;
use axum::Json;

use crate::application::handlers::{GenerateValuePropCommand, SaveValuePropCommand};

use super::super::auth::AuthenticatedUser;
use super::super::response::ApiError;
use super::super::state::AppState;
use super::dto::{
    GenerateValuePropRequest, GeneratedValuePropView, SaveValuePropRequest, ValuePropView,
};

/// GET /api/value-proposition
pub async fn get_value_prop(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ValuePropView>, ApiError> {
    let vp = state.get_value_prop_handler().handle(&user.user_id).await?;
    Ok(Json(vp.into()))
}

/// PUT /api/value-proposition
pub async fn save_value_prop(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(body): Json<SaveValuePropRequest>,
) -> Result<Json<ValuePropView>, ApiError> {
    let vp = state
        .save_value_prop_handler()
        .handle(SaveValuePropCommand {
            user_id: user.user_id,
            text: body.text,
        })
        .await?;
    Ok(Json(vp.into()))
}

/// POST /api/value-proposition/generate
pub async fn generate_value_prop(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(body): Json<GenerateValuePropRequest>,
) -> Result<Json<GeneratedValuePropView>, ApiError> {
    let generated = state
        .generate_value_prop_handler()
        .handle(GenerateValuePropCommand {
            user_id: user.user_id,
            age_group: body.age_group,
            role: body.role,
            unique_description: body.unique_description,
            ideal_client: body.ideal_client,
        })
        .await?;

    Ok(Json(GeneratedValuePropView {
        text: generated.text,
        rating: generated.rating,
    }))
}
