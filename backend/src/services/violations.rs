use log::info;
use rusqlite::Connection;
use uuid::Uuid;

use crate::database::{games, players, violations, ViolationFilter};
use crate::domain::{NewViolation, Violation, ViolationUpdate};
use crate::errors::{AppError, AppResult};

pub fn create_violation(conn: &Connection, new_violation: &NewViolation) -> AppResult<Violation> {
    if new_violation.violation_type.trim().is_empty() {
        return Err(AppError::validation("violation type must not be empty"));
    }
    if players::find_by_id(conn, new_violation.player_id)?.is_none() {
        return Err(AppError::not_found("player", new_violation.player_id));
    }
    if games::find_by_id(conn, new_violation.game_id)?.is_none() {
        return Err(AppError::not_found("game", new_violation.game_id));
    }

    let violation = violations::insert_violation(conn, new_violation)?;
    info!(
        "Recorded {} violation {} for player {}",
        violation.violation_type, violation.violation_id, violation.player_id
    );
    Ok(violation)
}

pub fn get_violation(conn: &Connection, id: Uuid) -> AppResult<Violation> {
    violations::find_by_id(conn, id)?.ok_or_else(|| AppError::not_found("violation", id))
}

pub fn list_violations(conn: &Connection, filter: &ViolationFilter) -> AppResult<Vec<Violation>> {
    Ok(violations::list_filtered(conn, filter)?)
}

pub fn update_violation(conn: &Connection, id: Uuid, update: &ViolationUpdate) -> AppResult<Violation> {
    let mut violation = get_violation(conn, id)?;

    if let Some(violation_type) = &update.violation_type {
        if violation_type.trim().is_empty() {
            return Err(AppError::validation("violation type must not be empty"));
        }
        violation.violation_type = violation_type.clone();
    }
    if let Some(date) = update.violation_date {
        violation.violation_date = date;
    }
    if let Some(consequence) = &update.consequence {
        violation.consequence = Some(consequence.clone());
    }

    if !violations::update_violation(conn, &violation)? {
        return Err(AppError::not_found("violation", id));
    }
    info!("Updated violation {}", id);
    Ok(violation)
}

pub fn delete_violation(conn: &Connection, id: Uuid) -> AppResult<()> {
    if !violations::delete_by_id(conn, id)? {
        return Err(AppError::not_found("violation", id));
    }
    info!("Deleted violation {}", id);
    Ok(())
}
