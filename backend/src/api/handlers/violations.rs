use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::AppState;
use crate::database::ViolationFilter;
use crate::domain::{NewViolation, Violation, ViolationUpdate};
use crate::errors::AppResult;
use crate::services::violations;

pub async fn list_violations(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ViolationFilter>,
) -> AppResult<Json<Vec<Violation>>> {
    let conn = state.connection()?;
    Ok(Json(violations::list_violations(&conn, &filter)?))
}

pub async fn create_violation(
    State(state): State<Arc<AppState>>,
    Json(new_violation): Json<NewViolation>,
) -> AppResult<(StatusCode, Json<Violation>)> {
    let conn = state.connection()?;
    let violation = violations::create_violation(&conn, &new_violation)?;
    Ok((StatusCode::CREATED, Json(violation)))
}

pub async fn get_violation(
    State(state): State<Arc<AppState>>,
    Path(violation_id): Path<Uuid>,
) -> AppResult<Json<Violation>> {
    let conn = state.connection()?;
    Ok(Json(violations::get_violation(&conn, violation_id)?))
}

pub async fn update_violation(
    State(state): State<Arc<AppState>>,
    Path(violation_id): Path<Uuid>,
    Json(update): Json<ViolationUpdate>,
) -> AppResult<Json<Violation>> {
    let conn = state.connection()?;
    Ok(Json(violations::update_violation(&conn, violation_id, &update)?))
}

pub async fn delete_violation(
    State(state): State<Arc<AppState>>,
    Path(violation_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let conn = state.connection()?;
    violations::delete_violation(&conn, violation_id)?;
    Ok(StatusCode::NO_CONTENT)
}
