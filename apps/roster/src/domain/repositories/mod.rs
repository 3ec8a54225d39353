// Repository traits (ports)
// Implemented by adapters in the infrastructure layer

pub mod group_repository;
pub mod player_repository;

pub use group_repository::GroupRepository;
pub use player_repository::PlayerRepository;
