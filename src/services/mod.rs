// Application services orchestrating the store ports
// The goal write protocols live here because the store offers no
// cross-collection transaction to lean on

use std::future::Future;
use std::time::Duration;

use crate::domain::repositories::StoreError;

pub mod consistency;
pub mod last_goal;

// Re-export main types for convenience
pub use consistency::{ConsistencyManager, ReconcileOutcome, DEFAULT_STORE_TIMEOUT};
pub use last_goal::{GoalListSelector, LastGoalResolver};

/// Bounds a store call so a stalled store surfaces as a typed timeout
/// instead of hanging a protocol mid-flight
pub(crate) async fn bounded<T>(
    limit: Duration,
    call: impl Future<Output = Result<T, StoreError>>,
) -> Result<T, StoreError> {
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(StoreError::Timeout(limit)),
    }
}
