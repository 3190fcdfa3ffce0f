use anyhow::{Context, Result};
use rusqlite::Connection;

const DROP_ORDER: [&str; 6] = [
    "mentorships",
    "violations",
    "games",
    "skill_levels",
    "tournaments",
    "players",
];

/// Create every table that does not exist yet
pub fn init_database(conn: &Connection) -> Result<()> {
    execute_sql(conn, "PRAGMA foreign_keys = ON")?;

    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::debug!("Database schema ensured ({} statements)", statements.len());
    Ok(())
}

/// Drop all tables and recreate them empty
pub fn reset_database(conn: &Connection) -> Result<()> {
    for table in DROP_ORDER {
        execute_sql(conn, &format!("DROP TABLE IF EXISTS {}", table))
            .with_context(|| format!("Failed to drop table {}", table))?;
    }

    init_database(conn)?;
    log::info!("Database schema reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute_batch(sql)
        .context("Failed to execute SQL statement")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_init_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_database(&conn).unwrap();
        init_database(&conn).unwrap();

        assert_eq!(table_count(&conn), 6);
    }

    #[test]
    fn test_reset_empties_tables() {
        let conn = Connection::open_in_memory().unwrap();
        init_database(&conn).unwrap();
        conn.execute(
            "INSERT INTO skill_levels (title, rating_lower_bound, rating_upper_bound) VALUES ('Novice', 0, 999)",
            [],
        )
        .unwrap();

        reset_database(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM skill_levels", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(table_count(&conn), 6);
    }
}
