use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Outcome of a finished game. A game without one is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameResult {
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::WhiteWin => "WHITE_WIN",
            GameResult::BlackWin => "BLACK_WIN",
            GameResult::Draw => "DRAW",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WHITE_WIN" => Ok(GameResult::WhiteWin),
            "BLACK_WIN" => Ok(GameResult::BlackWin),
            "DRAW" => Ok(GameResult::Draw),
            other => Err(format!("unknown game result: {other}")),
        }
    }
}

/// Registered player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub rating: i64,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub rating: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub rating: Option<i64>,
}

/// Tournament with an inclusive date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub tournament_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTournament {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TournamentUpdate {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
}

/// Single game between two players. Either colour may be vacant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: Uuid,
    pub tournament_id: Uuid,
    pub player_white_id: Option<Uuid>,
    pub player_black_id: Option<Uuid>,
    pub result: Option<GameResult>,
    pub played_at: Option<DateTime<Utc>>,
}

impl Game {
    pub fn is_pending(&self) -> bool {
        self.result.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewGame {
    pub tournament_id: Uuid,
    #[serde(default)]
    pub player_white_id: Option<Uuid>,
    #[serde(default)]
    pub player_black_id: Option<Uuid>,
    #[serde(default)]
    pub result: Option<GameResult>,
    #[serde(default)]
    pub played_at: Option<DateTime<Utc>>,
}

impl NewGame {
    /// Scheduled game with no result and no play time
    pub fn pending(tournament_id: Uuid, white: Uuid, black: Uuid) -> Self {
        Self {
            tournament_id,
            player_white_id: Some(white),
            player_black_id: Some(black),
            result: None,
            played_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameUpdate {
    pub result: Option<GameResult>,
    pub played_at: Option<DateTime<Utc>>,
    pub tournament_id: Option<Uuid>,
}

/// Named rating range, bounds inclusive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub title: String,
    pub rating_lower_bound: i64,
    pub rating_upper_bound: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillLevelUpdate {
    pub title: Option<String>,
    pub rating_lower_bound: Option<i64>,
    pub rating_upper_bound: Option<i64>,
}

/// Rule violation committed by a player during a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub violation_id: Uuid,
    pub player_id: Uuid,
    pub game_id: Uuid,
    pub violation_type: String,
    pub violation_date: DateTime<Utc>,
    pub consequence: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewViolation {
    pub player_id: Uuid,
    pub game_id: Uuid,
    pub violation_type: String,
    pub violation_date: DateTime<Utc>,
    #[serde(default)]
    pub consequence: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViolationUpdate {
    pub violation_type: Option<String>,
    pub violation_date: Option<DateTime<Utc>>,
    pub consequence: Option<String>,
}

/// Mentor relation between two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mentorship {
    pub player_id: Uuid,
    pub mentor_id: Uuid,
}
