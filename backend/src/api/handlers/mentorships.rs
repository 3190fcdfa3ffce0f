use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::AppState;
use crate::database::MentorshipFilter;
use crate::domain::Mentorship;
use crate::errors::AppResult;
use crate::services::mentorships;

pub async fn list_mentorships(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<MentorshipFilter>,
) -> AppResult<Json<Vec<Mentorship>>> {
    let conn = state.connection()?;
    Ok(Json(mentorships::list_mentorships(&conn, &filter)?))
}

pub async fn create_mentorship(
    State(state): State<Arc<AppState>>,
    Json(pair): Json<Mentorship>,
) -> AppResult<(StatusCode, Json<Mentorship>)> {
    let conn = state.connection()?;
    let created = mentorships::create_mentorship(&conn, &pair)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_mentorship(
    State(state): State<Arc<AppState>>,
    Path((player_id, mentor_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Mentorship>> {
    let conn = state.connection()?;
    Ok(Json(mentorships::get_mentorship(&conn, player_id, mentor_id)?))
}

/// Body is the replacement pair
pub async fn repoint_mentorship(
    State(state): State<Arc<AppState>>,
    Path((player_id, mentor_id)): Path<(Uuid, Uuid)>,
    Json(replacement): Json<Mentorship>,
) -> AppResult<Json<Mentorship>> {
    let conn = state.connection()?;
    let current = Mentorship { player_id, mentor_id };
    Ok(Json(mentorships::repoint_mentorship(&conn, &current, &replacement)?))
}

pub async fn delete_mentorship(
    State(state): State<Arc<AppState>>,
    Path((player_id, mentor_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    let conn = state.connection()?;
    mentorships::delete_mentorship(&conn, player_id, mentor_id)?;
    Ok(StatusCode::NO_CONTENT)
}
