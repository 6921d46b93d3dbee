//! Application router assembly.

use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::advisor::advisor_routes;
use super::campaigns::campaigns_routes;
use super::plans::plans_routes;
use super::state::AppState;
use super::valueprop::valueprop_routes;

/// Assembles every feature router behind tracing, CORS, and timeout layers.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(plans_routes())
        .merge(valueprop_routes())
        .merge(campaigns_routes())
        .merge(advisor_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(60)))
        .with_state(state)
}
