use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::AppState;
use crate::database::GameFilter;
use crate::domain::{Game, GameUpdate, NewGame};
use crate::errors::AppResult;
use crate::services::games;

pub async fn list_games(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<GameFilter>,
) -> AppResult<Json<Vec<Game>>> {
    let conn = state.connection()?;
    Ok(Json(games::list_games(&conn, &filter)?))
}

pub async fn create_game(
    State(state): State<Arc<AppState>>,
    Json(new_game): Json<NewGame>,
) -> AppResult<(StatusCode, Json<Game>)> {
    let conn = state.connection()?;
    let game = games::create_game(&conn, &new_game, &state.config.rating)?;
    Ok((StatusCode::CREATED, Json(game)))
}

pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
) -> AppResult<Json<Game>> {
    let conn = state.connection()?;
    Ok(Json(games::get_game(&conn, game_id)?))
}

pub async fn update_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
    Json(update): Json<GameUpdate>,
) -> AppResult<Json<Game>> {
    let conn = state.connection()?;
    Ok(Json(games::update_game(&conn, game_id, &update, &state.config.rating)?))
}

pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let conn = state.connection()?;
    games::delete_game(&conn, game_id)?;
    Ok(StatusCode::NO_CONTENT)
}
