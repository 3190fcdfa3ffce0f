use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::models::PlayerFilter;
use super::query::{placeholders, Conditions};
use crate::domain::{NewPlayer, Player};

const PLAYER_COLUMNS: &str = "player_id, first_name, last_name, rating";

pub fn insert_player(conn: &Connection, player: &NewPlayer) -> Result<Player> {
    let sql = format!(
        "INSERT INTO players (player_id, first_name, last_name, rating) VALUES (?1, ?2, ?3, ?4) RETURNING {}",
        PLAYER_COLUMNS
    );

    conn.query_row(
        &sql,
        params![Uuid::new_v4(), player.first_name, player.last_name, player.rating],
        parse_player_row,
    )
    .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        player_id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        rating: row.get(3)?,
    })
}

pub fn find_by_id(conn: &Connection, id: Uuid) -> Result<Option<Player>> {
    let sql = format!("SELECT {} FROM players WHERE player_id = ?1", PLAYER_COLUMNS);

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    list_filtered(conn, &PlayerFilter::default())
}

pub fn list_filtered(conn: &Connection, filter: &PlayerFilter) -> Result<Vec<Player>> {
    let mut conditions = Conditions::new();
    conditions.push_opt("first_name = ?", filter.first_name.clone());
    conditions.push_opt("last_name = ?", filter.last_name.clone());
    conditions.push_opt("rating = ?", filter.rating);
    conditions.push_opt("rating >= ?", filter.min_rating);
    conditions.push_opt("rating < ?", filter.max_rating);

    let sql = format!(
        "SELECT {} FROM players {} ORDER BY rowid",
        PLAYER_COLUMNS,
        conditions.where_clause()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(conditions.params(), parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players")?;

    Ok(rows)
}

/// Distinct players sitting on either side of any of the given games
pub fn list_by_games(conn: &Connection, game_ids: &[Uuid]) -> Result<Vec<Player>> {
    if game_ids.is_empty() {
        return Ok(Vec::new());
    }

    let sql = format!(
        "SELECT {} FROM players WHERE player_id IN (
            SELECT player_white_id FROM games WHERE game_id IN ({ids})
            UNION
            SELECT player_black_id FROM games WHERE game_id IN ({ids})
        ) ORDER BY rowid",
        PLAYER_COLUMNS,
        ids = placeholders(game_ids.len())
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(rusqlite::params_from_iter(game_ids.iter()), parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players by games")?;

    Ok(rows)
}

pub fn update_player(conn: &Connection, player: &Player) -> Result<bool> {
    let sql = "UPDATE players SET first_name = ?2, last_name = ?3, rating = ?4 WHERE player_id = ?1";

    let changed = conn
        .execute(
            sql,
            params![player.player_id, player.first_name, player.last_name, player.rating],
        )
        .context("Failed to update player")?;

    Ok(changed > 0)
}

/// Shift a rating by `delta`, never going below zero
pub fn adjust_rating(conn: &Connection, id: Uuid, delta: i64) -> Result<Option<Player>> {
    let sql = format!(
        "UPDATE players SET rating = MAX(0, rating + ?2) WHERE player_id = ?1 RETURNING {}",
        PLAYER_COLUMNS
    );

    conn.query_row(&sql, params![id, delta], parse_player_row)
        .optional()
        .context("Failed to adjust player rating")
}

pub fn delete_by_id(conn: &Connection, id: Uuid) -> Result<bool> {
    let changed = conn
        .execute("DELETE FROM players WHERE player_id = ?1", params![id])
        .context("Failed to delete player")?;

    Ok(changed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{memory_db, new_player};

    #[test]
    fn test_insert_and_find() {
        let conn = memory_db();
        let player = insert_player(&conn, &new_player("Magnus", "Carlsen", 2830)).unwrap();

        let found = find_by_id(&conn, player.player_id).unwrap();
        assert_eq!(found, Some(player));
        assert_eq!(find_by_id(&conn, Uuid::new_v4()).unwrap(), None);
    }

    #[test]
    fn test_filters_combine() {
        let conn = memory_db();
        insert_player(&conn, &new_player("Judit", "Polgar", 2735)).unwrap();
        insert_player(&conn, &new_player("Susan", "Polgar", 2577)).unwrap();
        insert_player(&conn, &new_player("Judit", "Other", 1200)).unwrap();

        let polgars = list_filtered(
            &conn,
            &PlayerFilter {
                last_name: Some("Polgar".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(polgars.len(), 2);

        let judit_polgar = list_filtered(
            &conn,
            &PlayerFilter {
                first_name: Some("Judit".to_string()),
                last_name: Some("Polgar".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(judit_polgar.len(), 1);
        assert_eq!(judit_polgar[0].rating, 2735);

        let range = list_filtered(
            &conn,
            &PlayerFilter {
                min_rating: Some(1200),
                max_rating: Some(2735),
                ..Default::default()
            },
        )
        .unwrap();
        let ratings: Vec<i64> = range.iter().map(|p| p.rating).collect();
        assert_eq!(ratings, vec![2577, 1200]);
    }

    #[test]
    fn test_adjust_rating_clamps_at_zero() {
        let conn = memory_db();
        let player = insert_player(&conn, &new_player("Low", "Rated", 5)).unwrap();

        let adjusted = adjust_rating(&conn, player.player_id, -9).unwrap().unwrap();
        assert_eq!(adjusted.rating, 0);

        let adjusted = adjust_rating(&conn, player.player_id, 10).unwrap().unwrap();
        assert_eq!(adjusted.rating, 10);

        assert_eq!(adjust_rating(&conn, Uuid::new_v4(), 10).unwrap(), None);
    }

    #[test]
    fn test_delete_reports_missing_rows() {
        let conn = memory_db();
        let player = insert_player(&conn, &new_player("Gone", "Soon", 1000)).unwrap();

        assert!(delete_by_id(&conn, player.player_id).unwrap());
        assert!(!delete_by_id(&conn, player.player_id).unwrap());
    }
}
