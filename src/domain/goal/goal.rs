use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::team::TeamId;

/// Unique identifier of a goal document
///
/// Generated on the client side so a write protocol always knows the
/// identifier it is working with, even when a store call never returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(Uuid);

impl GoalId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GoalId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Goal entity
///
/// One goal recorded between two teams: `team_for` scored it, `team_to`
/// conceded it. Both sides may be the same team (an own-goal style entry
/// is the caller's business).
///
/// # Invariants
/// - Minute is never negative
/// - Team references never change after creation
#[derive(Debug, Clone)]
pub struct Goal {
    id: GoalId,
    team_for: TeamId,
    team_to: TeamId,
    author: String,
    minute: i32,
}

impl Goal {
    /// Creates a new Goal
    ///
    /// # Arguments
    /// * `team_for` - Team credited with the goal
    /// * `team_to` - Team the goal was scored against
    /// * `author` - Scorer's name, free text
    /// * `minute` - Match minute, must be non-negative
    ///
    /// # Returns
    /// * `Ok(Goal)` - New goal with a fresh identifier
    /// * `Err(DomainError::Validation)` - If the minute is negative
    pub fn new(
        team_for: TeamId,
        team_to: TeamId,
        author: String,
        minute: i32,
    ) -> Result<Self, DomainError> {
        if minute < 0 {
            return Err(DomainError::Validation(format!(
                "minute must be non-negative, got {}",
                minute
            )));
        }

        Ok(Self {
            id: GoalId::new(),
            team_for,
            team_to,
            author,
            minute,
        })
    }

    /// Applies a partial update to the editable fields
    ///
    /// Team references are not part of the patch; a recorded goal keeps
    /// pointing at the teams it was created with.
    pub(crate) fn apply(&mut self, patch: GoalPatch) {
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(minute) = patch.minute {
            self.minute = minute;
        }
    }

    // ===== Getters =====

    /// Returns the goal's ID
    pub fn id(&self) -> GoalId {
        self.id
    }

    /// Returns the team credited with the goal
    pub fn team_for(&self) -> TeamId {
        self.team_for
    }

    /// Returns the team the goal was scored against
    pub fn team_to(&self) -> TeamId {
        self.team_to
    }

    /// Returns the scorer's name
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the match minute
    pub fn minute(&self) -> i32 {
        self.minute
    }
}

/// Validated partial update for a goal's editable fields
///
/// Built by the update protocol after its checks pass; stores apply it
/// without further validation.
#[derive(Debug, Clone, Default)]
pub struct GoalPatch {
    pub author: Option<String>,
    pub minute: Option<i32>,
}

/// Requested changes to a goal exactly as a caller sent them
///
/// May name the team references; the update protocol only accepts values
/// that match the stored ones.
#[derive(Debug, Clone, Default)]
pub struct GoalUpdate {
    pub team_for: Option<TeamId>,
    pub team_to: Option<TeamId>,
    pub author: Option<String>,
    pub minute: Option<i32>,
}
