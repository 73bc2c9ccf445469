use async_trait::async_trait;

use super::memory::MemoryDb;
use crate::domain::goal::{Goal, GoalId, GoalPatch};
use crate::domain::repositories::{GoalStore, StoreError};

/// In-memory implementation of GoalStore
///
/// Backed by the shared [`MemoryDb`] handle, injected the same way a
/// connected driver would be.
pub struct MemoryGoalStore {
    db: MemoryDb,
}

impl MemoryGoalStore {
    /// Creates a new MemoryGoalStore
    ///
    /// # Arguments
    /// * `db` - Shared in-memory store handle
    pub fn new(db: MemoryDb) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GoalStore for MemoryGoalStore {
    async fn insert(&self, goal: Goal) -> Result<(), StoreError> {
        self.db.goals().insert(goal).await;
        Ok(())
    }

    async fn get(&self, id: GoalId) -> Result<Option<Goal>, StoreError> {
        Ok(self.db.goals().get(id).await)
    }

    async fn get_many(&self, ids: &[GoalId]) -> Result<Vec<Goal>, StoreError> {
        Ok(self.db.goals().get_many(ids).await)
    }

    async fn update(&self, id: GoalId, patch: GoalPatch) -> Result<Option<Goal>, StoreError> {
        Ok(self.db.goals().update(id, |goal| goal.apply(patch)).await)
    }

    async fn remove(&self, id: GoalId) -> Result<Option<Goal>, StoreError> {
        Ok(self.db.goals().remove(id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::TeamId;

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = MemoryGoalStore::new(MemoryDb::new());
        let goal = Goal::new(TeamId::new(), TeamId::new(), "Messi".to_string(), 23).unwrap();
        let id = goal.id();

        store.insert(goal).await.unwrap();

        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored.author(), "Messi");
        assert_eq!(stored.minute(), 23);
    }

    #[tokio::test]
    async fn update_patches_only_named_fields() {
        let store = MemoryGoalStore::new(MemoryDb::new());
        let goal = Goal::new(TeamId::new(), TeamId::new(), "Messi".to_string(), 23).unwrap();
        let id = goal.id();
        store.insert(goal).await.unwrap();

        let updated = store
            .update(
                id,
                GoalPatch {
                    minute: Some(24),
                    ..GoalPatch::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.minute(), 24);
        assert_eq!(updated.author(), "Messi");
    }

    #[tokio::test]
    async fn missing_goal_surfaces_as_none() {
        let store = MemoryGoalStore::new(MemoryDb::new());
        let ghost = GoalId::new();

        assert!(store.get(ghost).await.unwrap().is_none());
        assert!(store
            .update(ghost, GoalPatch::default())
            .await
            .unwrap()
            .is_none());
        assert!(store.remove(ghost).await.unwrap().is_none());
    }
}
