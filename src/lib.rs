//! Scoreline API Library
//!
//! This library provides the core functionality for the Scoreline API:
//! the team and goal domain, the store ports and their in-memory
//! implementation, and the services keeping goal references consistent.

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod services;
