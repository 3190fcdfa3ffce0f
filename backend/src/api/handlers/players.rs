use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::AppState;
use crate::api::models::RatingAdjustment;
use crate::database::PlayerFilter;
use crate::domain::{NewPlayer, Player, PlayerUpdate};
use crate::errors::AppResult;
use crate::services::players;

pub async fn list_players(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<PlayerFilter>,
) -> AppResult<Json<Vec<Player>>> {
    let conn = state.connection()?;
    Ok(Json(players::list_players(&conn, &filter)?))
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(new_player): Json<NewPlayer>,
) -> AppResult<(StatusCode, Json<Player>)> {
    let conn = state.connection()?;
    let player = players::create_player(&conn, &new_player)?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<Uuid>,
) -> AppResult<Json<Player>> {
    let conn = state.connection()?;
    Ok(Json(players::get_player(&conn, player_id)?))
}

pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<Uuid>,
    Json(update): Json<PlayerUpdate>,
) -> AppResult<Json<Player>> {
    let conn = state.connection()?;
    Ok(Json(players::update_player(&conn, player_id, &update)?))
}

pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let conn = state.connection()?;
    players::delete_player(&conn, player_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn adjust_player_rating(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<Uuid>,
    Json(adjustment): Json<RatingAdjustment>,
) -> AppResult<Json<Player>> {
    let conn = state.connection()?;
    Ok(Json(players::adjust_rating(&conn, player_id, adjustment.increment)?))
}
