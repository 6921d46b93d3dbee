//! HTTP routes for plan and participant endpoints.

use axum::routing::get;
use axum::Router;

use super::super::state::AppState;
use super::handlers::{list_participants, list_plans};

/// Creates the plan directory router.
pub fn plans_routes() -> Router<AppState> {
    Router::new()
        // GET /api/plans
        .route("/api/plans", get(list_plans))
        // GET /api/participants
        .route("/api/participants", get(list_participants))
}
