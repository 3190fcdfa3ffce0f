use log::info;
use rusqlite::Connection;
use uuid::Uuid;

use crate::database::{players, PlayerFilter};
use crate::domain::{NewPlayer, Player, PlayerUpdate};
use crate::errors::{AppError, AppResult};

fn validate_name(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn validate_rating(rating: i64) -> AppResult<()> {
    if rating < 0 {
        return Err(AppError::validation("rating must not be negative"));
    }
    Ok(())
}

pub fn create_player(conn: &Connection, new_player: &NewPlayer) -> AppResult<Player> {
    validate_name("first_name", &new_player.first_name)?;
    validate_name("last_name", &new_player.last_name)?;
    validate_rating(new_player.rating)?;

    let player = players::insert_player(conn, new_player)?;
    info!("Created player {} ({})", player.full_name(), player.player_id);
    Ok(player)
}

pub fn get_player(conn: &Connection, id: Uuid) -> AppResult<Player> {
    players::find_by_id(conn, id)?.ok_or_else(|| AppError::not_found("player", id))
}

pub fn list_players(conn: &Connection, filter: &PlayerFilter) -> AppResult<Vec<Player>> {
    Ok(players::list_filtered(conn, filter)?)
}

pub fn update_player(conn: &Connection, id: Uuid, update: &PlayerUpdate) -> AppResult<Player> {
    let mut player = get_player(conn, id)?;

    if let Some(first_name) = &update.first_name {
        validate_name("first_name", first_name)?;
        player.first_name = first_name.clone();
    }
    if let Some(last_name) = &update.last_name {
        validate_name("last_name", last_name)?;
        player.last_name = last_name.clone();
    }
    if let Some(rating) = update.rating {
        validate_rating(rating)?;
        player.rating = rating;
    }

    if !players::update_player(conn, &player)? {
        return Err(AppError::not_found("player", id));
    }
    info!("Updated player {}", id);
    Ok(player)
}

/// Shift a rating by `delta`; the result is clamped at zero
pub fn adjust_rating(conn: &Connection, id: Uuid, delta: i64) -> AppResult<Player> {
    let player = players::adjust_rating(conn, id, delta)?
        .ok_or_else(|| AppError::not_found("player", id))?;
    info!("Adjusted rating of {} by {} to {}", id, delta, player.rating);
    Ok(player)
}

pub fn delete_player(conn: &Connection, id: Uuid) -> AppResult<()> {
    if !players::delete_by_id(conn, id)? {
        return Err(AppError::not_found("player", id));
    }
    info!("Deleted player {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{memory_db, new_player};

    #[test]
    fn test_create_rejects_bad_input() {
        let conn = memory_db();

        let negative = create_player(&conn, &new_player("Ann", "Lee", -1));
        assert!(matches!(negative, Err(AppError::Validation(_))));

        let blank = create_player(&conn, &new_player("  ", "Lee", 1000));
        assert!(matches!(blank, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let conn = memory_db();
        let player = create_player(&conn, &new_player("Ann", "Lee", 1200)).unwrap();

        let updated = update_player(
            &conn,
            player.player_id,
            &PlayerUpdate {
                rating: Some(1250),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.first_name, "Ann");
        assert_eq!(updated.rating, 1250);
        assert_eq!(get_player(&conn, player.player_id).unwrap(), updated);
    }

    #[test]
    fn test_adjust_rating_clamps_at_zero() {
        let conn = memory_db();
        let player = create_player(&conn, &new_player("Ann", "Lee", 5)).unwrap();

        let adjusted = adjust_rating(&conn, player.player_id, -9).unwrap();
        assert_eq!(adjusted.rating, 0);
    }

    #[test]
    fn test_missing_player() {
        let conn = memory_db();
        let id = Uuid::new_v4();

        assert!(matches!(get_player(&conn, id), Err(AppError::NotFound(_))));
        assert!(matches!(adjust_rating(&conn, id, 10), Err(AppError::NotFound(_))));
        assert!(matches!(delete_player(&conn, id), Err(AppError::NotFound(_))));
    }
}
