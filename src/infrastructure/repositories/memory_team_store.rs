use async_trait::async_trait;

use super::memory::MemoryDb;
use crate::domain::goal::GoalId;
use crate::domain::repositories::{SortOrder, StoreError, TeamSort, TeamSortKey, TeamStore};
use crate::domain::team::{GoalList, Team, TeamId, TeamPatch};

/// In-memory implementation of TeamStore
///
/// Backed by the shared [`MemoryDb`] handle, injected the same way a
/// connected driver would be. Each trait call maps to exactly one
/// collection call, which is where the per-document atomicity comes from.
pub struct MemoryTeamStore {
    db: MemoryDb,
}

impl MemoryTeamStore {
    /// Creates a new MemoryTeamStore
    ///
    /// # Arguments
    /// * `db` - Shared in-memory store handle
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeamStore for MemoryTeamStore {
    async fn insert(&self, team: Team) -> Result<(), StoreError> {
        self.db.teams().insert(team).await;
        Ok(())
    }

    async fn get(&self, id: TeamId) -> Result<Option<Team>, StoreError> {
        Ok(self.db.teams().get(id).await)
    }

    async fn update(&self, id: TeamId, patch: TeamPatch) -> Result<Option<Team>, StoreError> {
        Ok(self.db.teams().update(id, |team| team.apply(patch)).await)
    }

    async fn remove(&self, id: TeamId) -> Result<Option<Team>, StoreError> {
        Ok(self.db.teams().remove(id).await)
    }

    async fn list(&self, sort: Option<TeamSort>, skip: usize) -> Result<Vec<Team>, StoreError> {
        let mut teams = self.db.teams().all().await;
        if let Some(sort) = sort {
            teams.sort_by(|a, b| {
                let ordering = match sort.key {
                    TeamSortKey::Code => a.code().as_str().cmp(b.code().as_str()),
                    TeamSortKey::Name => a.name().cmp(b.name()),
                    TeamSortKey::CreatedAt => a.created_at().cmp(&b.created_at()),
                    TeamSortKey::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
                };
                match sort.order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }
        Ok(teams.into_iter().skip(skip).collect())
    }

    async fn push_ref(
        &self,
        id: TeamId,
        list: GoalList,
        goal: GoalId,
    ) -> Result<bool, StoreError> {
        let found = self
            .db
            .teams()
            .update(id, |team| team.push_goal(list, goal))
            .await;
        Ok(found.is_some())
    }

    async fn push_ref_if_absent(
        &self,
        id: TeamId,
        list: GoalList,
        goal: GoalId,
    ) -> Result<bool, StoreError> {
        let found = self
            .db
            .teams()
            .update(id, |team| {
                team.push_goal_if_absent(list, goal);
            })
            .await;
        Ok(found.is_some())
    }

    async fn pull_ref(
        &self,
        id: TeamId,
        list: GoalList,
        goal: GoalId,
    ) -> Result<bool, StoreError> {
        let mut changed = false;
        let found = self
            .db
            .teams()
            .update(id, |team| changed = team.pull_goal(list, goal))
            .await;
        Ok(found.is_some() && changed)
    }

    async fn pull_ref_from_all(&self, goal: GoalId) -> Result<usize, StoreError> {
        let touched = self
            .db
            .teams()
            .modify_each(|team| {
                let scored = team.pull_goal(GoalList::Scored, goal);
                let against = team.pull_goal(GoalList::Against, goal);
                scored || against
            })
            .await;
        Ok(touched)
    }
}
