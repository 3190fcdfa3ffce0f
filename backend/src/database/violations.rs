use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::models::ViolationFilter;
use super::query::Conditions;
use crate::domain::{NewViolation, Violation};

const VIOLATION_COLUMNS: &str =
    "violation_id, player_id, game_id, violation_type, violation_date, consequence";

pub fn insert_violation(conn: &Connection, violation: &NewViolation) -> Result<Violation> {
    let sql = format!(
        "INSERT INTO violations (violation_id, player_id, game_id, violation_type, violation_date, consequence) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING {}",
        VIOLATION_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            Uuid::new_v4(),
            violation.player_id,
            violation.game_id,
            violation.violation_type,
            violation.violation_date,
            violation.consequence
        ],
        parse_violation_row,
    )
    .context("Failed to insert violation")
}

fn parse_violation_row(row: &rusqlite::Row) -> rusqlite::Result<Violation> {
    Ok(Violation {
        violation_id: row.get(0)?,
        player_id: row.get(1)?,
        game_id: row.get(2)?,
        violation_type: row.get(3)?,
        violation_date: row.get(4)?,
        consequence: row.get(5)?,
    })
}

pub fn find_by_id(conn: &Connection, id: Uuid) -> Result<Option<Violation>> {
    let sql = format!(
        "SELECT {} FROM violations WHERE violation_id = ?1",
        VIOLATION_COLUMNS
    );

    conn.query_row(&sql, params![id], parse_violation_row)
        .optional()
        .context("Failed to query violation by id")
}

pub fn list_filtered(conn: &Connection, filter: &ViolationFilter) -> Result<Vec<Violation>> {
    let mut conditions = Conditions::new();
    conditions.push_opt("player_id = ?", filter.player_id);
    conditions.push_opt("game_id = ?", filter.game_id);

    let sql = format!(
        "SELECT {} FROM violations {} ORDER BY violation_date, rowid",
        VIOLATION_COLUMNS,
        conditions.where_clause()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(conditions.params(), parse_violation_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list violations")?;

    Ok(rows)
}

pub fn update_violation(conn: &Connection, violation: &Violation) -> Result<bool> {
    let sql = "UPDATE violations SET violation_type = ?2, violation_date = ?3, consequence = ?4 WHERE violation_id = ?1";

    let changed = conn
        .execute(
            sql,
            params![
                violation.violation_id,
                violation.violation_type,
                violation.violation_date,
                violation.consequence
            ],
        )
        .context("Failed to update violation")?;

    Ok(changed > 0)
}

pub fn delete_by_id(conn: &Connection, id: Uuid) -> Result<bool> {
    let changed = conn
        .execute("DELETE FROM violations WHERE violation_id = ?1", params![id])
        .context("Failed to delete violation")?;

    Ok(changed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::games::{delete_by_id as delete_game, insert_game};
    use crate::database::test_support::{game_between, memory_db, seed_players, seed_tournament};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_violations_follow_their_game() {
        let conn = memory_db();
        let tournament = seed_tournament(&conn, "Arbiter Test");
        let [a, b, _] = seed_players(&conn);
        let game = insert_game(&conn, &game_between(&tournament, &a, &b, None)).unwrap();

        let violation = insert_violation(
            &conn,
            &NewViolation {
                player_id: a.player_id,
                game_id: game.game_id,
                violation_type: "illegal move".to_string(),
                violation_date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
                consequence: Some("two minutes added for opponent".to_string()),
            },
        )
        .unwrap();

        let by_player = list_filtered(
            &conn,
            &ViolationFilter {
                player_id: Some(a.player_id),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(by_player, vec![violation.clone()]);

        delete_game(&conn, game.game_id).unwrap();
        assert_eq!(find_by_id(&conn, violation.violation_id).unwrap(), None);
    }
}
