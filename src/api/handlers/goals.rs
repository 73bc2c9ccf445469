use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::goal::{Goal, GoalId, GoalUpdate};
use crate::domain::team::{Team, TeamId};

/// Request body for recording a goal
#[derive(Debug, Deserialize)]
pub struct CreateGoalRequest {
    pub team_for: TeamId,
    pub team_to: TeamId,
    pub author: String,
    pub minute: i32,
}

/// Request body for editing a goal
///
/// May echo `team_for`/`team_to` with their current values; an actual
/// change of either is rejected.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateGoalRequest {
    pub team_for: Option<TeamId>,
    pub team_to: Option<TeamId>,
    pub author: Option<String>,
    pub minute: Option<i32>,
}

/// Goal representation with raw team identifiers
#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub id: GoalId,
    pub team_for: TeamId,
    pub team_to: TeamId,
    pub author: String,
    pub minute: i32,
}

impl From<&Goal> for GoalResponse {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id(),
            team_for: goal.team_for(),
            team_to: goal.team_to(),
            author: goal.author().to_string(),
            minute: goal.minute(),
        }
    }
}

/// Compact team view embedded in goal detail responses
#[derive(Debug, Serialize)]
pub struct TeamSummary {
    pub id: TeamId,
    pub code: String,
    pub name: String,
}

impl From<&Team> for TeamSummary {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            code: team.code().as_str().to_string(),
            name: team.name().to_string(),
        }
    }
}

/// Goal representation with the referenced teams expanded
///
/// A side is null when its team no longer exists.
#[derive(Debug, Serialize)]
pub struct GoalDetailResponse {
    pub id: GoalId,
    pub team_for: Option<TeamSummary>,
    pub team_to: Option<TeamSummary>,
    pub author: String,
    pub minute: i32,
}

async fn expand_teams(state: &AppState, goal: &Goal) -> Result<GoalDetailResponse, ApiError> {
    let team_for = state
        .teams
        .get(goal.team_for())
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Store error: {}", e)))?;
    let team_to = state
        .teams
        .get(goal.team_to())
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Store error: {}", e)))?;

    Ok(GoalDetailResponse {
        id: goal.id(),
        team_for: team_for.as_ref().map(TeamSummary::from),
        team_to: team_to.as_ref().map(TeamSummary::from),
        author: goal.author().to_string(),
        minute: goal.minute(),
    })
}

/// Record a goal between two teams
///
/// POST /goals
pub async fn create_goal(
    State(state): State<AppState>,
    Json(req): Json<CreateGoalRequest>,
) -> Result<(StatusCode, Json<GoalDetailResponse>), ApiError> {
    let goal = state
        .manager
        .create_goal(req.team_for, req.team_to, req.author, req.minute)
        .await?;

    let body = expand_teams(&state, &goal).await?;

    Ok((StatusCode::CREATED, Json(body)))
}

/// Get a goal by ID with its teams expanded
///
/// GET /goals/:goal_id
pub async fn get_goal(
    State(state): State<AppState>,
    Path(id): Path<GoalId>,
) -> Result<Json<GoalDetailResponse>, ApiError> {
    let goal = state
        .goals
        .get(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Store error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Goal not found: {}", id)))?;

    Ok(Json(expand_teams(&state, &goal).await?))
}

/// Edit a goal's author and minute
///
/// PATCH /goals/:goal_id
pub async fn update_goal(
    State(state): State<AppState>,
    Path(id): Path<GoalId>,
    Json(req): Json<UpdateGoalRequest>,
) -> Result<Json<GoalResponse>, ApiError> {
    let update = GoalUpdate {
        team_for: req.team_for,
        team_to: req.team_to,
        author: req.author,
        minute: req.minute,
    };

    let goal = state.manager.update_goal(id, update).await?;

    Ok(Json(GoalResponse::from(&goal)))
}

/// Delete a goal and unlink it from both teams
///
/// DELETE /goals/:goal_id
pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<GoalId>,
) -> Result<Json<GoalResponse>, ApiError> {
    let goal = state.manager.delete_goal(id).await?;

    Ok(Json(GoalResponse::from(&goal)))
}
