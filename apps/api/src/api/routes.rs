use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::{health, members, teams};
use crate::api::state::AppState;

/// Builds the API router (without middleware layers)
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/api/teams", post(teams::create_team).get(teams::list_teams))
        .route("/api/teams/:id", get(teams::get_team))
        // Member routes
        .route(
            "/api/members",
            post(members::create_member).get(members::list_members),
        )
        .route("/api/members/search", get(members::search_members))
        .route("/api/members/search/page", get(members::search_members_page))
        .route("/api/members/:id", get(members::get_member))
        // Shared state
        .with_state(state)
}
