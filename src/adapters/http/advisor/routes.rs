//! HTTP routes for advisor endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{generate_advice, get_advisor_profile};

/// Creates the advisor router.
pub fn advisor_routes() -> Router<AppState> {
    Router::new()
        // GET /api/advisor/profile
        .route("/api/advisor/profile", get(get_advisor_profile))
        // POST /api/advisor/advice
        .route("/api/advisor/advice", post(generate_advice))
}
