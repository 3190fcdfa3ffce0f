use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::AppState;
use crate::database::SkillLevelFilter;
use crate::domain::{SkillLevel, SkillLevelUpdate};
use crate::errors::AppResult;
use crate::services::skill_levels;

pub async fn list_skill_levels(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<SkillLevelFilter>,
) -> AppResult<Json<Vec<SkillLevel>>> {
    let conn = state.connection()?;
    Ok(Json(skill_levels::list_skill_levels(&conn, &filter)?))
}

pub async fn create_skill_level(
    State(state): State<Arc<AppState>>,
    Json(level): Json<SkillLevel>,
) -> AppResult<(StatusCode, Json<SkillLevel>)> {
    let conn = state.connection()?;
    let created = skill_levels::create_skill_level(&conn, &level)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_skill_level(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> AppResult<Json<SkillLevel>> {
    let conn = state.connection()?;
    Ok(Json(skill_levels::get_skill_level(&conn, &title)?))
}

pub async fn update_skill_level(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
    Json(update): Json<SkillLevelUpdate>,
) -> AppResult<Json<SkillLevel>> {
    let conn = state.connection()?;
    Ok(Json(skill_levels::update_skill_level(&conn, &title, &update)?))
}

pub async fn delete_skill_level(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> AppResult<StatusCode> {
    let conn = state.connection()?;
    skill_levels::delete_skill_level(&conn, &title)?;
    Ok(StatusCode::NO_CONTENT)
}
