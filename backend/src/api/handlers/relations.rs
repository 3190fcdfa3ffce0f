//! Aggregate read endpoints under `/relations`.

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::AppState;
use crate::api::models::TournamentNameQuery;
use crate::errors::AppResult;
use crate::services::StatsService;
use crate::stats::{HeadToHead, PlayerMatchHistory, PlayerSummary, TopPlayerStats, TournamentStanding};

fn stats(state: &AppState) -> StatsService {
    StatsService::new(state.config.stats.total_games)
}

pub async fn get_top_players(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<TopPlayerStats>>> {
    let conn = state.connection()?;
    Ok(Json(stats(&state).top_players(&*conn)?))
}

pub async fn get_player_summary(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<Uuid>,
) -> AppResult<Json<PlayerSummary>> {
    let conn = state.connection()?;
    Ok(Json(stats(&state).player_summary(&*conn, player_id)?))
}

pub async fn get_player_match_history(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<Uuid>,
) -> AppResult<Json<PlayerMatchHistory>> {
    let conn = state.connection()?;
    Ok(Json(stats(&state).match_history(&*conn, player_id)?))
}

pub async fn get_head_to_head(
    State(state): State<Arc<AppState>>,
    Path((player_id, opponent_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<HeadToHead>> {
    let conn = state.connection()?;
    Ok(Json(stats(&state).head_to_head(&*conn, player_id, opponent_id)?))
}

pub async fn get_tournament_participants(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TournamentNameQuery>,
) -> AppResult<Json<Vec<TournamentStanding>>> {
    let conn = state.connection()?;
    Ok(Json(stats(&state).tournament_standings_by_name(&*conn, &query.name)?))
}
