// Infrastructure layer module
// Contains storage adapters and configuration
// Follows Hexagonal Architecture

pub mod config;
pub mod repositories;
pub mod store;
