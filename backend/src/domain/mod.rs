pub mod models;

pub use models::{
    Game, GameResult, GameUpdate, Mentorship, NewGame, NewPlayer, NewTournament, NewViolation,
    Player, PlayerUpdate, SkillLevel, SkillLevelUpdate, Tournament, TournamentUpdate, Violation,
    ViolationUpdate,
};
