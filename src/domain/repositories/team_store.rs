use async_trait::async_trait;

use super::StoreError;
use crate::domain::goal::GoalId;
use crate::domain::team::{GoalList, Team, TeamId, TeamPatch};

/// Field a team listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSortKey {
    Code,
    Name,
    CreatedAt,
    UpdatedAt,
}

/// Direction of a team listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Ordering requested for a team listing
#[derive(Debug, Clone, Copy)]
pub struct TeamSort {
    pub key: TeamSortKey,
    pub order: SortOrder,
}

/// Store port for the team collection
///
/// Defines the contract for persisting and retrieving teams. Every call
/// addresses a single document and is atomic on its own; the store offers
/// no transaction spanning several calls or collections.
#[async_trait]
pub trait TeamStore: Send + Sync {
    /// Persist a new team document
    async fn insert(&self, team: Team) -> Result<(), StoreError>;

    /// Fetch a team by its ID
    async fn get(&self, id: TeamId) -> Result<Option<Team>, StoreError>;

    /// Apply a partial update and return the updated document,
    /// or `None` when the team does not exist
    async fn update(&self, id: TeamId, patch: TeamPatch) -> Result<Option<Team>, StoreError>;

    /// Delete a team and return the removed document,
    /// or `None` when the team does not exist
    async fn remove(&self, id: TeamId) -> Result<Option<Team>, StoreError>;

    /// All teams in the requested order, skipping the first `skip`
    ///
    /// Without a sort the natural insertion order is kept.
    async fn list(&self, sort: Option<TeamSort>, skip: usize) -> Result<Vec<Team>, StoreError>;

    /// Append a goal reference to one of the team's lists
    ///
    /// Plain append: replaying the call stores a second copy. Returns
    /// `false` when the team does not exist.
    async fn push_ref(&self, id: TeamId, list: GoalList, goal: GoalId)
        -> Result<bool, StoreError>;

    /// Append a goal reference only when it is not already present
    ///
    /// Returns `true` when the reference is in place afterwards and
    /// `false` when the team does not exist.
    async fn push_ref_if_absent(
        &self,
        id: TeamId,
        list: GoalList,
        goal: GoalId,
    ) -> Result<bool, StoreError>;

    /// Remove every occurrence of a goal reference from one of the team's
    /// lists
    ///
    /// Removing an absent reference, or addressing a vanished team, is a
    /// successful no-op. Returns whether anything was removed.
    async fn pull_ref(&self, id: TeamId, list: GoalList, goal: GoalId)
        -> Result<bool, StoreError>;

    /// Strip a goal reference from both lists of every team
    ///
    /// Returns how many teams were modified.
    async fn pull_ref_from_all(&self, goal: GoalId) -> Result<usize, StoreError>;
}
