use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::GameResult;

impl ToSql for GameResult {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for GameResult {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

// Query-string filters for list endpoints. Unset fields do not restrict.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub rating: Option<i64>,
    /// Inclusive
    pub min_rating: Option<i64>,
    /// Exclusive
    pub max_rating: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TournamentFilter {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameFilter {
    pub tournament_id: Option<Uuid>,
    pub player_id: Option<Uuid>,
    pub result: Option<GameResult>,
    /// Calendar day (UTC) the game was played on
    pub played_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViolationFilter {
    pub player_id: Option<Uuid>,
    pub game_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MentorshipFilter {
    pub player_id: Option<Uuid>,
    pub mentor_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillLevelFilter {
    pub rating: Option<i64>,
}
