use std::sync::Arc;
use std::time::Duration;

use super::bounded;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::goal::{Goal, GoalId, GoalPatch, GoalUpdate};
use crate::domain::repositories::{GoalStore, StoreError, TeamStore};
use crate::domain::team::{GoalList, TeamId};

/// Default bound applied to every store call
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_millis(5000);

/// Coordinates the multi-step goal write protocols
///
/// A goal write touches up to three documents: the goal itself plus the
/// reference lists of both teams. The store cannot update them in one
/// transaction, so this manager runs the steps in a fixed order, bounds
/// each call, and reports a write that died between steps as a partial
/// failure naming the goal left out of sync.
pub struct ConsistencyManager {
    teams: Arc<dyn TeamStore>,
    goals: Arc<dyn GoalStore>,
    op_timeout: Duration,
}

/// What a reconciliation pass did for one goal identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The goal exists and both team references are in place again
    Relinked,
    /// The goal is gone; its identifier was swept from the reference
    /// lists of this many teams
    Purged { teams: usize },
}

impl ConsistencyManager {
    pub fn new(teams: Arc<dyn TeamStore>, goals: Arc<dyn GoalStore>, op_timeout: Duration) -> Self {
        Self {
            teams,
            goals,
            op_timeout,
        }
    }

    /// Records a goal between two teams
    ///
    /// Protocol order: validate both team references, persist the goal
    /// document, then append its identifier to the scorer's `Scored` list
    /// and the conceding team's `Against` list. The goal document goes
    /// first so a reference never points at a goal that was never written.
    ///
    /// # Errors
    /// * `UnknownTeam` - A referenced team does not exist; nothing was written
    /// * `Validation` - The minute is negative; nothing was written
    /// * `PartialFailure` - The goal document was (or may have been)
    ///   persisted but at least one reference list was not updated
    pub async fn create_goal(
        &self,
        team_for: TeamId,
        team_to: TeamId,
        author: String,
        minute: i32,
    ) -> DomainResult<Goal> {
        // Both referenced teams must exist before anything is written
        if bounded(self.op_timeout, self.teams.get(team_for))
            .await?
            .is_none()
        {
            return Err(DomainError::UnknownTeam(team_for));
        }
        if bounded(self.op_timeout, self.teams.get(team_to))
            .await?
            .is_none()
        {
            return Err(DomainError::UnknownTeam(team_to));
        }

        let goal = Goal::new(team_for, team_to, author, minute)?;
        let id = goal.id();

        match bounded(self.op_timeout, self.goals.insert(goal.clone())).await {
            Ok(()) => {}
            Err(e @ StoreError::Timeout(_)) => {
                // The insert may or may not have landed; either way the
                // reference lists were not touched yet
                tracing::error!("Goal {} insert timed out with unknown outcome", id);
                return Err(DomainError::PartialFailure {
                    goal: id,
                    detail: format!("insert timed out: {}", e),
                });
            }
            // A clean rejection means nothing was persisted
            Err(e) => return Err(e.into()),
        }

        if let Err(detail) = self.append_ref(team_for, GoalList::Scored, id).await {
            return Err(DomainError::PartialFailure { goal: id, detail });
        }
        if let Err(detail) = self.append_ref(team_to, GoalList::Against, id).await {
            return Err(DomainError::PartialFailure { goal: id, detail });
        }

        Ok(goal)
    }

    async fn append_ref(&self, team: TeamId, list: GoalList, goal: GoalId) -> Result<(), String> {
        match bounded(self.op_timeout, self.teams.push_ref(team, list, goal)).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::error!("Team {} vanished before goal {} was linked", team, goal);
                Err(format!("team {} vanished before its list was updated", team))
            }
            Err(e) => {
                tracing::error!("Appending goal {} to team {} failed: {}", goal, team, e);
                Err(format!("appending to team {} failed: {}", team, e))
            }
        }
    }

    /// Deletes a goal and removes its references from both teams
    ///
    /// The two reference removals run independently: one failing never
    /// stops the other, and pulling an already-absent reference is a
    /// no-op, so replaying the protocol converges on a clean state.
    ///
    /// # Errors
    /// * `GoalNotFound` - No goal with that identifier exists
    /// * `PartialFailure` - The goal document is gone (or its removal
    ///   timed out) but at least one reference removal failed
    pub async fn delete_goal(&self, id: GoalId) -> DomainResult<Goal> {
        let removed = match bounded(self.op_timeout, self.goals.remove(id)).await {
            Ok(Some(goal)) => goal,
            Ok(None) => return Err(DomainError::GoalNotFound(id)),
            Err(e @ StoreError::Timeout(_)) => {
                tracing::error!("Goal {} removal timed out with unknown outcome", id);
                return Err(DomainError::PartialFailure {
                    goal: id,
                    detail: format!("removal timed out: {}", e),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let sides = [
            (removed.team_for(), GoalList::Scored),
            (removed.team_to(), GoalList::Against),
        ];
        let mut failures = Vec::new();
        for (team, list) in sides {
            match bounded(self.op_timeout, self.teams.pull_ref(team, list, id)).await {
                Ok(true) => {}
                Ok(false) => {
                    // Nothing to remove: the team is gone or the reference
                    // was never appended. Converged either way.
                    tracing::warn!("No reference to goal {} on team {}", id, team);
                }
                Err(e) => {
                    tracing::error!("Removing goal {} from team {} failed: {}", id, team, e);
                    failures.push(format!("team {}: {}", team, e));
                }
            }
        }

        if !failures.is_empty() {
            return Err(DomainError::PartialFailure {
                goal: id,
                detail: format!("references not fully removed ({})", failures.join("; ")),
            });
        }

        Ok(removed)
    }

    /// Edits a goal's author and minute
    ///
    /// Team references are immutable on a recorded goal: re-pointing it
    /// means running the delete and create protocols instead. Naming the
    /// current values is accepted so callers may echo the full document.
    ///
    /// # Errors
    /// * `GoalNotFound` - No goal with that identifier exists
    /// * `ImmutableTeamRefs` - The update names a different team reference
    /// * `Validation` - The new minute is negative
    pub async fn update_goal(&self, id: GoalId, update: GoalUpdate) -> DomainResult<Goal> {
        let current = bounded(self.op_timeout, self.goals.get(id))
            .await?
            .ok_or(DomainError::GoalNotFound(id))?;

        let changes_for = update.team_for.is_some_and(|t| t != current.team_for());
        let changes_to = update.team_to.is_some_and(|t| t != current.team_to());
        if changes_for || changes_to {
            return Err(DomainError::ImmutableTeamRefs);
        }

        if let Some(minute) = update.minute {
            if minute < 0 {
                return Err(DomainError::Validation(format!(
                    "minute must be non-negative, got {}",
                    minute
                )));
            }
        }

        let patch = GoalPatch {
            author: update.author,
            minute: update.minute,
        };
        bounded(self.op_timeout, self.goals.update(id, patch))
            .await?
            .ok_or(DomainError::GoalNotFound(id))
    }

    /// Repairs the aftermath of a partial goal write
    ///
    /// Safe to replay: when the goal document exists its references are
    /// re-appended only where missing, and when it is gone its identifier
    /// is swept from every team list.
    pub async fn reconcile_goal(&self, id: GoalId) -> DomainResult<ReconcileOutcome> {
        match bounded(self.op_timeout, self.goals.get(id)).await? {
            Some(goal) => {
                let sides = [
                    (goal.team_for(), GoalList::Scored),
                    (goal.team_to(), GoalList::Against),
                ];
                for (team, list) in sides {
                    let present = bounded(
                        self.op_timeout,
                        self.teams.push_ref_if_absent(team, list, id),
                    )
                    .await?;
                    if !present {
                        tracing::warn!("Cannot relink goal {}: team {} no longer exists", id, team);
                    }
                }
                Ok(ReconcileOutcome::Relinked)
            }
            None => {
                let teams = bounded(self.op_timeout, self.teams.pull_ref_from_all(id)).await?;
                Ok(ReconcileOutcome::Purged { teams })
            }
        }
    }
}
