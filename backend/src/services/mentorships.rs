use log::info;
use rusqlite::Connection;
use uuid::Uuid;

use crate::database::{mentorships, players, MentorshipFilter};
use crate::domain::Mentorship;
use crate::errors::{constraint_as_conflict, AppError, AppResult};

fn validate(conn: &Connection, pair: &Mentorship) -> AppResult<()> {
    if pair.player_id == pair.mentor_id {
        return Err(AppError::validation("a player cannot mentor themselves"));
    }
    for id in [pair.player_id, pair.mentor_id] {
        if players::find_by_id(conn, id)?.is_none() {
            return Err(AppError::not_found("player", id));
        }
    }
    Ok(())
}

fn duplicate(pair: &Mentorship) -> String {
    format!(
        "player {} is already mentored by {}",
        pair.player_id, pair.mentor_id
    )
}

fn pair_not_found(player_id: Uuid, mentor_id: Uuid) -> AppError {
    AppError::NotFound(format!("mentorship {player_id} -> {mentor_id} not found"))
}

pub fn create_mentorship(conn: &Connection, pair: &Mentorship) -> AppResult<Mentorship> {
    validate(conn, pair)?;

    let created = mentorships::insert_mentorship(conn, pair)
        .map_err(|e| constraint_as_conflict(e, &duplicate(pair)))?;
    info!("Player {} is now mentored by {}", created.player_id, created.mentor_id);
    Ok(created)
}

pub fn get_mentorship(conn: &Connection, player_id: Uuid, mentor_id: Uuid) -> AppResult<Mentorship> {
    mentorships::find_pair(conn, player_id, mentor_id)?
        .ok_or_else(|| pair_not_found(player_id, mentor_id))
}

pub fn list_mentorships(conn: &Connection, filter: &MentorshipFilter) -> AppResult<Vec<Mentorship>> {
    Ok(mentorships::list_filtered(conn, filter)?)
}

/// Move an existing pair onto a new (player, mentor)
pub fn repoint_mentorship(
    conn: &Connection,
    current: &Mentorship,
    replacement: &Mentorship,
) -> AppResult<Mentorship> {
    get_mentorship(conn, current.player_id, current.mentor_id)?;
    validate(conn, replacement)?;

    let updated = mentorships::update_pair(conn, current, replacement)
        .map_err(|e| constraint_as_conflict(e, &duplicate(replacement)))?;
    if !updated {
        return Err(pair_not_found(current.player_id, current.mentor_id));
    }
    info!(
        "Mentorship {} -> {} re-pointed to {} -> {}",
        current.player_id, current.mentor_id, replacement.player_id, replacement.mentor_id
    );
    Ok(*replacement)
}

pub fn delete_mentorship(conn: &Connection, player_id: Uuid, mentor_id: Uuid) -> AppResult<()> {
    if !mentorships::delete_pair(conn, player_id, mentor_id)? {
        return Err(pair_not_found(player_id, mentor_id));
    }
    info!("Ended mentorship {} -> {}", player_id, mentor_id);
    Ok(())
}
