// Store implementations (data access layer)
// Adapters that implement the domain store ports

pub mod memory;
pub mod memory_goal_store;
pub mod memory_team_store;

pub use memory::{Document, MemoryCollection, MemoryDb};
pub use memory_goal_store::MemoryGoalStore;
pub use memory_team_store::MemoryTeamStore;
