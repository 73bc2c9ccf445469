use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::goal::GoalId;
use crate::domain::repositories::{SortOrder, TeamSort, TeamSortKey};
use crate::domain::team::{Flag, Team, TeamCode, TeamId, TeamPatch};
use crate::services::GoalListSelector;

use super::goals::GoalResponse;

/// Request body for creating a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub code: String,
    pub flag: String,
    pub name: String,
}

/// Request body for updating a team's descriptive fields
#[derive(Debug, Deserialize, Default)]
pub struct UpdateTeamRequest {
    pub code: Option<String>,
    pub flag: Option<String>,
    pub name: Option<String>,
}

/// Query parameters accepted by the team listing
///
/// `order` follows the document store convention: `-1` for descending,
/// anything else for ascending. Unknown `sort_by` fields fall back to the
/// natural order.
#[derive(Debug, Deserialize, Default)]
pub struct ListTeamsQuery {
    pub sort_by: Option<String>,
    pub order: Option<i64>,
    pub skip: Option<usize>,
}

/// Query parameter selecting which reference list a last-goal lookup reads
#[derive(Debug, Deserialize, Default)]
pub struct LastGoalQuery {
    pub list: Option<GoalListSelector>,
}

/// Team representation returned by the API
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: TeamId,
    pub code: String,
    pub flag: String,
    pub name: String,
    pub goals_scored: Vec<GoalId>,
    pub goals_against: Vec<GoalId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            code: team.code().as_str().to_string(),
            flag: team.flag().as_str().to_string(),
            name: team.name().to_string(),
            goals_scored: team.goals_scored().to_vec(),
            goals_against: team.goals_against().to_vec(),
            created_at: team.created_at(),
            updated_at: team.updated_at(),
        }
    }
}

fn parse_sort(query: &ListTeamsQuery) -> Option<TeamSort> {
    let key = match query.sort_by.as_deref()? {
        "code" => TeamSortKey::Code,
        "name" => TeamSortKey::Name,
        "created_at" => TeamSortKey::CreatedAt,
        "updated_at" => TeamSortKey::UpdatedAt,
        _ => return None,
    };
    let order = if query.order == Some(-1) {
        SortOrder::Desc
    } else {
        SortOrder::Asc
    };
    Some(TeamSort { key, order })
}

/// List all teams
///
/// GET /teams
pub async fn list_teams(
    State(state): State<AppState>,
    Query(query): Query<ListTeamsQuery>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state
        .teams
        .list(parse_sort(&query), query.skip.unwrap_or(0))
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to list teams: {}", e)))?;

    let responses = teams.iter().map(TeamResponse::from).collect();

    Ok(Json(responses))
}

/// Create a new team
///
/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    // Value object construction carries the validation
    let code = TeamCode::new(req.code)?;
    let flag = Flag::new(req.flag)?;
    let team = Team::new(code, flag, req.name);

    state
        .teams
        .insert(team.clone())
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save team: {}", e)))?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// Get a team by ID
///
/// GET /teams/:team_id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<TeamId>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .teams
        .get(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Store error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Update a team's descriptive fields
///
/// PUT /teams/:team_id and PATCH /teams/:team_id
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<TeamId>,
    Json(req): Json<UpdateTeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let patch = TeamPatch {
        code: req.code.map(TeamCode::new).transpose()?,
        flag: req.flag.map(Flag::new).transpose()?,
        name: req.name,
    };

    let team = state
        .teams
        .update(id, patch)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to update team: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team
///
/// DELETE /teams/:team_id
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<TeamId>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .teams
        .remove(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete team: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Get the latest goal recorded for a team
///
/// GET /teams/:team_id/goal/last
pub async fn last_goal(
    State(state): State<AppState>,
    Path(id): Path<TeamId>,
    Query(query): Query<LastGoalQuery>,
) -> Result<Json<GoalResponse>, ApiError> {
    let goal = state
        .resolver
        .find_last(id, query.list.unwrap_or_default())
        .await?
        .ok_or_else(|| ApiError::not_found("Team has no recorded goals"))?;

    Ok(Json(GoalResponse::from(&goal)))
}

/// Delete the latest goal recorded for a team
///
/// DELETE /teams/:team_id/goal/last
pub async fn remove_last_goal(
    State(state): State<AppState>,
    Path(id): Path<TeamId>,
    Query(query): Query<LastGoalQuery>,
) -> Result<Json<GoalResponse>, ApiError> {
    let goal = state
        .resolver
        .remove_last(id, query.list.unwrap_or_default())
        .await?
        .ok_or_else(|| ApiError::not_found("Team has no recorded goals"))?;

    Ok(Json(GoalResponse::from(&goal)))
}
