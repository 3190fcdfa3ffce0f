pub mod brackets;
pub mod games;
pub mod mentorships;
pub mod players;
pub mod server;
pub mod skill_levels;
pub mod stats;
pub mod tournaments;
pub mod violations;

pub use brackets::{BracketService, GeneratedBracket};
pub use server::ServerService;
pub use stats::StatsService;
