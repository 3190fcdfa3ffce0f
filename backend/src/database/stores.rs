//! Narrow read/write seams used by the aggregate and bracket services.
//!
//! The services only depend on these traits, so a test can hand them any
//! store. The SQLite implementation delegates to the table modules.

use anyhow::Result;
use rusqlite::Connection;
use uuid::Uuid;

use super::{games, players, skill_levels, tournaments};
use crate::domain::{Game, NewGame, Player, SkillLevel, Tournament};

pub trait PlayerStore {
    fn get_player(&self, id: Uuid) -> Result<Option<Player>>;
    fn list_players(&self) -> Result<Vec<Player>>;
    fn list_players_by_games(&self, game_ids: &[Uuid]) -> Result<Vec<Player>>;
}

pub trait GameStore {
    fn list_all_games(&self) -> Result<Vec<Game>>;
    fn list_games_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Game>>;
    fn list_games_by_player(&self, player_id: Uuid) -> Result<Vec<Game>>;
    fn list_joint_games(&self, player1_id: Uuid, player2_id: Uuid) -> Result<Vec<Game>>;
    /// All-or-nothing insert; returns the stored rows
    fn create_game_batch(&self, games: &[NewGame]) -> Result<Vec<Game>>;
}

pub trait TournamentStore {
    fn get_tournament(&self, id: Uuid) -> Result<Option<Tournament>>;
    fn get_tournament_by_name(&self, name: &str) -> Result<Option<Tournament>>;
}

pub trait SkillLevelStore {
    fn find_skill_level_by_rating(&self, rating: i64) -> Result<Option<SkillLevel>>;
}

impl PlayerStore for Connection {
    fn get_player(&self, id: Uuid) -> Result<Option<Player>> {
        players::find_by_id(self, id)
    }

    fn list_players(&self) -> Result<Vec<Player>> {
        players::list_all(self)
    }

    fn list_players_by_games(&self, game_ids: &[Uuid]) -> Result<Vec<Player>> {
        players::list_by_games(self, game_ids)
    }
}

impl GameStore for Connection {
    fn list_all_games(&self) -> Result<Vec<Game>> {
        games::list_all(self)
    }

    fn list_games_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Game>> {
        games::list_by_tournament(self, tournament_id)
    }

    fn list_games_by_player(&self, player_id: Uuid) -> Result<Vec<Game>> {
        games::list_by_player(self, player_id)
    }

    fn list_joint_games(&self, player1_id: Uuid, player2_id: Uuid) -> Result<Vec<Game>> {
        games::list_joint(self, player1_id, player2_id)
    }

    fn create_game_batch(&self, new_games: &[NewGame]) -> Result<Vec<Game>> {
        games::insert_batch(self, new_games)
    }
}

impl TournamentStore for Connection {
    fn get_tournament(&self, id: Uuid) -> Result<Option<Tournament>> {
        tournaments::find_by_id(self, id)
    }

    fn get_tournament_by_name(&self, name: &str) -> Result<Option<Tournament>> {
        tournaments::find_by_name(self, name)
    }
}

impl SkillLevelStore for Connection {
    fn find_skill_level_by_rating(&self, rating: i64) -> Result<Option<SkillLevel>> {
        skill_levels::find_by_rating(self, rating)
    }
}
