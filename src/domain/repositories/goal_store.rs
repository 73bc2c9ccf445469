use async_trait::async_trait;

use super::StoreError;
use crate::domain::goal::{Goal, GoalId, GoalPatch};

/// Store port for the goal collection
///
/// Defines the contract for persisting and retrieving goals. Every call
/// addresses a single document and is atomic on its own.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Persist a new goal document
    async fn insert(&self, goal: Goal) -> Result<(), StoreError>;

    /// Fetch a goal by its ID
    async fn get(&self, id: GoalId) -> Result<Option<Goal>, StoreError>;

    /// Fetch several goals, preserving the order of `ids`
    ///
    /// Identifiers that resolve to nothing are silently skipped, so a
    /// reference list pointing at a deleted goal still yields a result.
    async fn get_many(&self, ids: &[GoalId]) -> Result<Vec<Goal>, StoreError>;

    /// Apply a partial update and return the updated document,
    /// or `None` when the goal does not exist
    async fn update(&self, id: GoalId, patch: GoalPatch) -> Result<Option<Goal>, StoreError>;

    /// Delete a goal and return the removed document,
    /// or `None` when the goal does not exist
    async fn remove(&self, id: GoalId) -> Result<Option<Goal>, StoreError>;
}
