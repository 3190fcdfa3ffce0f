pub mod connection;
pub mod games;
pub mod mentorships;
pub mod models;
pub mod players;
pub mod query;
pub mod setup;
pub mod skill_levels;
pub mod stores;
pub mod tournaments;
pub mod violations;

#[cfg(test)]
pub(crate) mod test_support;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use models::*;
pub use stores::{GameStore, PlayerStore, SkillLevelStore, TournamentStore};
