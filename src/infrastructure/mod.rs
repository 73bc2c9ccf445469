// Infrastructure layer module
// Contains store adapters and boot-time helpers
// Follows Hexagonal Architecture

pub mod repositories;
pub mod seed;
