use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::AppState;
use crate::api::models::BracketParams;
use crate::database::TournamentFilter;
use crate::domain::{NewTournament, Tournament, TournamentUpdate};
use crate::errors::AppResult;
use crate::services::{tournaments, BracketService, GeneratedBracket, StatsService};
use crate::stats::TournamentStanding;

pub async fn list_tournaments(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<TournamentFilter>,
) -> AppResult<Json<Vec<Tournament>>> {
    let conn = state.connection()?;
    Ok(Json(tournaments::list_tournaments(&conn, &filter)?))
}

pub async fn create_tournament(
    State(state): State<Arc<AppState>>,
    Json(new_tournament): Json<NewTournament>,
) -> AppResult<(StatusCode, Json<Tournament>)> {
    let conn = state.connection()?;
    let tournament = tournaments::create_tournament(&conn, &new_tournament)?;
    Ok((StatusCode::CREATED, Json(tournament)))
}

pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<Uuid>,
) -> AppResult<Json<Tournament>> {
    let conn = state.connection()?;
    Ok(Json(tournaments::get_tournament(&conn, tournament_id)?))
}

pub async fn update_tournament(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<Uuid>,
    Json(update): Json<TournamentUpdate>,
) -> AppResult<Json<Tournament>> {
    let conn = state.connection()?;
    Ok(Json(tournaments::update_tournament(&conn, tournament_id, &update)?))
}

pub async fn delete_tournament(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let conn = state.connection()?;
    tournaments::delete_tournament(&conn, tournament_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_participants(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<Uuid>,
) -> AppResult<Json<Vec<TournamentStanding>>> {
    let conn = state.connection()?;
    let service = StatsService::new(state.config.stats.total_games);
    Ok(Json(service.tournament_standings(&*conn, tournament_id)?))
}

pub async fn create_bracket(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<Uuid>,
    Query(params): Query<BracketParams>,
) -> AppResult<(StatusCode, Json<GeneratedBracket>)> {
    let conn = state.connection()?;
    let service = match params.seed {
        Some(seed) => BracketService::with_seed(Some(seed)),
        None => BracketService::new(&state.config.bracket),
    };
    let bracket = service.generate(&*conn, tournament_id)?;
    Ok((StatusCode::CREATED, Json(bracket)))
}
