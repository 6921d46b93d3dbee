//! HTTP routes for value proposition endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{generate_value_prop, get_value_prop, save_value_prop};

/// Creates the value proposition router.
pub fn valueprop_routes() -> Router<AppState> {
    Router::new()
        // GET/PUT /api/value-proposition
        .route(
            "/api/value-proposition",
            get(get_value_prop).put(save_value_prop),
        )
        // POST /api/value-proposition/generate
        .route("/api/value-proposition/generate", post(generate_value_prop))
}
