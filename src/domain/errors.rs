use thiserror::Error;

use crate::domain::goal::GoalId;
use crate::domain::repositories::StoreError;
use crate::domain::team::TeamId;

/// Errors that can occur while maintaining the team/goal ledger
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input violated a structural constraint; nothing was written
    #[error("validation failed: {0}")]
    Validation(String),

    /// A goal named a team that does not exist; nothing was created
    #[error("referenced team {0} does not exist")]
    UnknownTeam(TeamId),

    #[error("goal not found: {0}")]
    GoalNotFound(GoalId),

    /// A multi-step write persisted its primary document and then failed,
    /// leaving the goal out of sync with one or both team reference lists
    /// until a caller reconciles it
    #[error("goal {goal} is out of sync with its team lists: {detail}")]
    PartialFailure { goal: GoalId, detail: String },

    /// An update tried to change which teams a recorded goal points at
    #[error("a recorded goal's team references are immutable")]
    ImmutableTeamRefs,

    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

pub type DomainResult<T> = Result<T, DomainError>;
