use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::models::MentorshipFilter;
use super::query::Conditions;
use crate::domain::Mentorship;

pub fn insert_mentorship(conn: &Connection, mentorship: &Mentorship) -> Result<Mentorship> {
    let sql = "INSERT INTO mentorships (player_id, mentor_id) VALUES (?1, ?2) RETURNING player_id, mentor_id";

    conn.query_row(
        sql,
        params![mentorship.player_id, mentorship.mentor_id],
        parse_mentorship_row,
    )
    .context("Failed to insert mentorship")
}

fn parse_mentorship_row(row: &rusqlite::Row) -> rusqlite::Result<Mentorship> {
    Ok(Mentorship {
        player_id: row.get(0)?,
        mentor_id: row.get(1)?,
    })
}

pub fn find_pair(conn: &Connection, player_id: Uuid, mentor_id: Uuid) -> Result<Option<Mentorship>> {
    let sql = "SELECT player_id, mentor_id FROM mentorships WHERE player_id = ?1 AND mentor_id = ?2";

    conn.query_row(sql, params![player_id, mentor_id], parse_mentorship_row)
        .optional()
        .context("Failed to query mentorship")
}

pub fn list_filtered(conn: &Connection, filter: &MentorshipFilter) -> Result<Vec<Mentorship>> {
    let mut conditions = Conditions::new();
    conditions.push_opt("player_id = ?", filter.player_id);
    conditions.push_opt("mentor_id = ?", filter.mentor_id);

    let sql = format!(
        "SELECT player_id, mentor_id FROM mentorships {} ORDER BY rowid",
        conditions.where_clause()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(conditions.params(), parse_mentorship_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list mentorships")?;

    Ok(rows)
}

/// Re-point an existing pair at a new (player, mentor)
pub fn update_pair(conn: &Connection, current: &Mentorship, replacement: &Mentorship) -> Result<bool> {
    let sql = "UPDATE mentorships SET player_id = ?3, mentor_id = ?4 WHERE player_id = ?1 AND mentor_id = ?2";

    let changed = conn
        .execute(
            sql,
            params![
                current.player_id,
                current.mentor_id,
                replacement.player_id,
                replacement.mentor_id
            ],
        )
        .context("Failed to update mentorship")?;

    Ok(changed > 0)
}

pub fn delete_pair(conn: &Connection, player_id: Uuid, mentor_id: Uuid) -> Result<bool> {
    let changed = conn
        .execute(
            "DELETE FROM mentorships WHERE player_id = ?1 AND mentor_id = ?2",
            params![player_id, mentor_id],
        )
        .context("Failed to delete mentorship")?;

    Ok(changed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::players::delete_by_id as delete_player;
    use crate::database::test_support::{memory_db, seed_players};

    #[test]
    fn test_pairs_cascade_with_players() {
        let conn = memory_db();
        let [student, mentor, _] = seed_players(&conn);
        let pair = Mentorship {
            player_id: student.player_id,
            mentor_id: mentor.player_id,
        };

        insert_mentorship(&conn, &pair).unwrap();
        assert!(insert_mentorship(&conn, &pair).is_err());

        delete_player(&conn, mentor.player_id).unwrap();
        assert_eq!(find_pair(&conn, student.player_id, mentor.player_id).unwrap(), None);
    }

    #[test]
    fn test_schema_forbids_self_mentoring() {
        let conn = memory_db();
        let [solo, _, _] = seed_players(&conn);

        let pair = Mentorship {
            player_id: solo.player_id,
            mentor_id: solo.player_id,
        };
        assert!(insert_mentorship(&conn, &pair).is_err());
    }
}
