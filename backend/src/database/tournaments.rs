use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::domain::{NewTournament, Tournament};

const TOURNAMENT_COLUMNS: &str = "tournament_id, name, start_date, end_date, location";

pub fn insert_tournament(conn: &Connection, tournament: &NewTournament) -> Result<Tournament> {
    let sql = format!(
        "INSERT INTO tournaments (tournament_id, name, start_date, end_date, location) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {}",
        TOURNAMENT_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            Uuid::new_v4(),
            tournament.name,
            tournament.start_date,
            tournament.end_date,
            tournament.location
        ],
        parse_tournament_row,
    )
    .context("Failed to insert new tournament")
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        tournament_id: row.get(0)?,
        name: row.get(1)?,
        start_date: row.get(2)?,
        end_date: row.get(3)?,
        location: row.get(4)?,
    })
}

pub fn find_by_id(conn: &Connection, id: Uuid) -> Result<Option<Tournament>> {
    let sql = format!(
        "SELECT {} FROM tournaments WHERE tournament_id = ?1",
        TOURNAMENT_COLUMNS
    );

    conn.query_row(&sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Tournament>> {
    let sql = format!("SELECT {} FROM tournaments WHERE name = ?1", TOURNAMENT_COLUMNS);

    conn.query_row(&sql, params![name], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by name")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Tournament>> {
    let sql = format!(
        "SELECT {} FROM tournaments ORDER BY start_date, rowid",
        TOURNAMENT_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list tournaments")?;

    Ok(rows)
}

pub fn update_tournament(conn: &Connection, tournament: &Tournament) -> Result<bool> {
    let sql = "UPDATE tournaments SET name = ?2, start_date = ?3, end_date = ?4, location = ?5 WHERE tournament_id = ?1";

    let changed = conn
        .execute(
            sql,
            params![
                tournament.tournament_id,
                tournament.name,
                tournament.start_date,
                tournament.end_date,
                tournament.location
            ],
        )
        .context("Failed to update tournament")?;

    Ok(changed > 0)
}

pub fn delete_by_id(conn: &Connection, id: Uuid) -> Result<bool> {
    let changed = conn
        .execute("DELETE FROM tournaments WHERE tournament_id = ?1", params![id])
        .context("Failed to delete tournament")?;

    Ok(changed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{memory_db, new_tournament};
    use chrono::NaiveDate;

    #[test]
    fn test_lookup_by_id_and_name() {
        let conn = memory_db();
        let created = insert_tournament(&conn, &new_tournament("Tata Steel")).unwrap();

        assert_eq!(find_by_id(&conn, created.tournament_id).unwrap(), Some(created.clone()));
        assert_eq!(find_by_name(&conn, "Tata Steel").unwrap(), Some(created));
        assert_eq!(find_by_name(&conn, "Norway Chess").unwrap(), None);
    }

    #[test]
    fn test_schema_rejects_inverted_dates() {
        let conn = memory_db();
        let mut tournament = new_tournament("Backwards");
        tournament.end_date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

        assert!(insert_tournament(&conn, &tournament).is_err());
    }

    #[test]
    fn test_schema_rejects_duplicate_names() {
        let conn = memory_db();
        insert_tournament(&conn, &new_tournament("Candidates")).unwrap();

        assert!(insert_tournament(&conn, &new_tournament("Candidates")).is_err());
    }
}
