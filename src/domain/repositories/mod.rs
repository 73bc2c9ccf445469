// Store ports (domain side of the persistence boundary)
// Implementations live in the infrastructure layer

use std::time::Duration;

use thiserror::Error;

pub mod goal_store;
pub mod team_store;

// Re-export main types for convenience
pub use goal_store::GoalStore;
pub use team_store::{SortOrder, TeamSort, TeamSortKey, TeamStore};

/// Failure surfaced by a store call
#[derive(Debug, Error)]
pub enum StoreError {
    /// The bound on a store call expired; the outcome of the underlying
    /// write is unknown
    #[error("store call timed out after {0:?}")]
    Timeout(Duration),

    /// The backing store rejected or failed the call outright
    #[error("store backend error: {0}")]
    Backend(String),
}
