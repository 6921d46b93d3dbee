//! HTTP routes for campaign endpoints.

use axum::routing::{delete, get, put};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{
    create_campaign, delete_campaign, list_campaigns, list_scenarios, update_campaign_message,
};

/// Creates the campaign router.
pub fn campaigns_routes() -> Router<AppState> {
    Router::new()
        // GET/POST /api/campaigns
        .route("/api/campaigns", get(list_campaigns).post(create_campaign))
        // GET /api/campaigns/scenarios
        .route("/api/campaigns/scenarios", get(list_scenarios))
        // PUT /api/campaigns/:campaign_id/message
        .route(
            "/api/campaigns/:campaign_id/message",
            put(update_campaign_message),
        )
        // DELETE /api/campaigns/:campaign_id
        .route("/api/campaigns/:campaign_id", delete(delete_campaign))
}
