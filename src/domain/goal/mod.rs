// Goal domain module
// Contains the goal entity and its update types

#![allow(clippy::module_inception)]

pub mod goal;

// Re-export main types for convenience
pub use goal::{Goal, GoalId, GoalPatch, GoalUpdate};
