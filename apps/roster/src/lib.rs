//! Team Roster Library
//!
//! Persistence for a sports-team organiser: named groups, and players split
//! across two teams within each group, stored in a key-value string store.

pub mod domain;
pub mod infrastructure;
