use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::SkillLevel;

const SKILL_LEVEL_COLUMNS: &str = "title, rating_lower_bound, rating_upper_bound";

pub fn insert_skill_level(conn: &Connection, level: &SkillLevel) -> Result<SkillLevel> {
    let sql = format!(
        "INSERT INTO skill_levels (title, rating_lower_bound, rating_upper_bound) VALUES (?1, ?2, ?3) RETURNING {}",
        SKILL_LEVEL_COLUMNS
    );

    conn.query_row(
        &sql,
        params![level.title, level.rating_lower_bound, level.rating_upper_bound],
        parse_skill_level_row,
    )
    .context("Failed to insert skill level")
}

fn parse_skill_level_row(row: &rusqlite::Row) -> rusqlite::Result<SkillLevel> {
    Ok(SkillLevel {
        title: row.get(0)?,
        rating_lower_bound: row.get(1)?,
        rating_upper_bound: row.get(2)?,
    })
}

pub fn find_by_title(conn: &Connection, title: &str) -> Result<Option<SkillLevel>> {
    let sql = format!("SELECT {} FROM skill_levels WHERE title = ?1", SKILL_LEVEL_COLUMNS);

    conn.query_row(&sql, params![title], parse_skill_level_row)
        .optional()
        .context("Failed to query skill level by title")
}

/// Range containing `rating`. Overlapping ranges resolve to the lowest one.
pub fn find_by_rating(conn: &Connection, rating: i64) -> Result<Option<SkillLevel>> {
    let sql = format!(
        "SELECT {} FROM skill_levels
         WHERE ?1 >= rating_lower_bound AND ?1 <= rating_upper_bound
         ORDER BY rating_lower_bound, title
         LIMIT 1",
        SKILL_LEVEL_COLUMNS
    );

    conn.query_row(&sql, params![rating], parse_skill_level_row)
        .optional()
        .context("Failed to query skill level by rating")
}

pub fn list_all(conn: &Connection) -> Result<Vec<SkillLevel>> {
    let sql = format!(
        "SELECT {} FROM skill_levels ORDER BY rating_lower_bound, title",
        SKILL_LEVEL_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_skill_level_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list skill levels")?;

    Ok(rows)
}

/// Rewrite the level stored under `title`, possibly renaming it
pub fn update_skill_level(conn: &Connection, title: &str, level: &SkillLevel) -> Result<bool> {
    let sql = "UPDATE skill_levels SET title = ?2, rating_lower_bound = ?3, rating_upper_bound = ?4 WHERE title = ?1";

    let changed = conn
        .execute(
            sql,
            params![title, level.title, level.rating_lower_bound, level.rating_upper_bound],
        )
        .context("Failed to update skill level")?;

    Ok(changed > 0)
}

pub fn delete_by_title(conn: &Connection, title: &str) -> Result<bool> {
    let changed = conn
        .execute("DELETE FROM skill_levels WHERE title = ?1", params![title])
        .context("Failed to delete skill level")?;

    Ok(changed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{memory_db, skill_level};

    #[test]
    fn test_rating_lookup_is_inclusive() {
        let conn = memory_db();
        insert_skill_level(&conn, &skill_level("Beginner", 0, 1199)).unwrap();
        insert_skill_level(&conn, &skill_level("Intermediate", 1200, 1599)).unwrap();

        let title = |rating| find_by_rating(&conn, rating).unwrap().map(|l| l.title);
        assert_eq!(title(1199), Some("Beginner".to_string()));
        assert_eq!(title(1200), Some("Intermediate".to_string()));
        assert_eq!(title(1599), Some("Intermediate".to_string()));
        assert_eq!(title(1600), None);
    }

    #[test]
    fn test_rename_moves_the_row() {
        let conn = memory_db();
        insert_skill_level(&conn, &skill_level("Expert", 2000, 2199)).unwrap();

        let renamed = skill_level("Candidate Master", 2000, 2199);
        assert!(update_skill_level(&conn, "Expert", &renamed).unwrap());

        assert_eq!(find_by_title(&conn, "Expert").unwrap(), None);
        assert_eq!(find_by_title(&conn, "Candidate Master").unwrap(), Some(renamed));
    }
}
