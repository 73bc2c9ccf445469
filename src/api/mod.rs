// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::domain::repositories::{GoalStore, TeamStore};
use crate::services::{ConsistencyManager, LastGoalResolver};

pub mod errors;
pub mod handlers;

/// Shared handler state: the injected store handles plus the services
/// built over them
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<dyn TeamStore>,
    pub goals: Arc<dyn GoalStore>,
    pub manager: Arc<ConsistencyManager>,
    pub resolver: Arc<LastGoalResolver>,
}

/// Builds the application router over the given state
///
/// Used by the server bootstrap and by the integration tests, so both
/// always exercise the same routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Team routes
        .route(
            "/teams",
            get(handlers::teams::list_teams).post(handlers::teams::create_team),
        )
        .route(
            "/teams/:team_id",
            get(handlers::teams::get_team)
                .put(handlers::teams::update_team)
                .patch(handlers::teams::update_team)
                .delete(handlers::teams::delete_team),
        )
        .route(
            "/teams/:team_id/goal/last",
            get(handlers::teams::last_goal).delete(handlers::teams::remove_last_goal),
        )
        // Goal routes
        .route("/goals", post(handlers::goals::create_goal))
        .route(
            "/goals/:goal_id",
            get(handlers::goals::get_goal)
                .patch(handlers::goals::update_goal)
                .delete(handlers::goals::delete_goal),
        )
        // Shared state
        .with_state(state)
}
