//! HTTP handlers for plan and participant endpoints.

use axum::extract::{Query, State};
use axum::Json;

use crate::application::handlers::ListParticipantsQuery;
use crate::domain::foundation::PlanId;
use crate::domain::plan::Plan;

use super::super::auth::AuthenticatedUser;
use super::super::response::ApiError;
use super::super::state::AppState;
use super::dto::{ParticipantListParams, ParticipantRow, ParticipantsPage};

/// GET /api/plans
pub async fn list_plans(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<Plan>>, ApiError> {
    let plans = state.list_plans_handler().handle().await?;
    Ok(Json(plans))
}

/// GET /api/participants?offset=&limit=&plan=&q=
pub async fn list_participants(
    State(state): State<AppState>,
    Query(params): Query<ParticipantListParams>,
    _user: AuthenticatedUser,
) -> Result<Json<ParticipantsPage>, ApiError> {
    // An empty plan selection from the UI means "no plan filter".
    let plan = match params.plan.as_deref() {
        Some(raw) if !raw.trim().is_empty() => Some(
            PlanId::new(raw).map_err(|_| ApiError::bad_request("Invalid plan identifier"))?,
        ),
        _ => None,
    };

    let result = state
        .list_participants_handler()
        .handle(ListParticipantsQuery {
            plan,
            search: params.q,
            offset: params.offset.unwrap_or(0),
            limit: params.limit,
        })
        .await?;

    Ok(Json(ParticipantsPage {
        participants: result
            .participants
            .into_iter()
            .map(ParticipantRow::from)
            .collect(),
        summary: result.summary,
    }))
}
