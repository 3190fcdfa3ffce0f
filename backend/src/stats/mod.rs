//! Storage-independent win/loss aggregation.
//!
//! Everything here works on plain slices of games so the same rules back
//! every aggregate query, regardless of where the games came from.

pub mod aggregate;
pub mod classify;
pub mod views;

pub use aggregate::{draw_percent, tally_players, win_loss_ratio, win_rate, OutcomeCounts, PlayerTally};
pub use classify::{classify, opponent_of, role_of, Participation, Role};
pub use views::{HeadToHead, MatchRecord, PlayerMatchHistory, PlayerSummary, TopPlayerStats, TournamentStanding};
