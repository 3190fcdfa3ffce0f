//! Read-only results of the aggregate queries, one type per query.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Game, Player};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub player_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub rating: i64,
    pub title: String,
    pub total_games: u32,
    pub win_rate: Option<f64>,
}

/// Leaderboard row. The metric names are part of the public contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPlayerStats {
    pub player_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub rating: i64,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    #[serde(rename = "winLoss")]
    pub win_loss: f64,
    #[serde(rename = "drawPercent")]
    pub draw_percent: f64,
    #[serde(rename = "avgOppRating")]
    pub avg_opp_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub game_id: Uuid,
    pub tournament_id: Uuid,
    pub player_white_id: Option<Uuid>,
    pub player_black_id: Option<Uuid>,
    pub result: Option<String>,
    pub played_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<Game> for MatchRecord {
    fn from(game: Game) -> Self {
        Self {
            game_id: game.game_id,
            tournament_id: game.tournament_id,
            player_white_id: game.player_white_id,
            player_black_id: game.player_black_id,
            result: game.result.map(|r| r.to_string()),
            played_at: game.played_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerMatchHistory {
    pub player_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// `None` when the player has never been seated
    pub match_history: Option<Vec<MatchRecord>>,
}

/// Record of one player against another, from the first player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadToHead {
    pub player_id: Uuid,
    pub opponent_id: Uuid,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentStanding {
    pub player_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub rating: i64,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl TournamentStanding {
    pub fn new(player: Player, wins: u32, losses: u32, draws: u32) -> Self {
        Self {
            player_id: player.player_id,
            first_name: player.first_name,
            last_name: player.last_name,
            rating: player.rating,
            wins,
            losses,
            draws,
        }
    }
}
