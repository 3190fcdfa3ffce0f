use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::models::GameFilter;
use super::query::Conditions;
use crate::domain::{Game, NewGame};

const GAME_COLUMNS: &str = "game_id, tournament_id, player_white_id, player_black_id, result, played_at";

const INSERT_GAME_SQL: &str = "INSERT INTO games (game_id, tournament_id, player_white_id, player_black_id, result, played_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING game_id, tournament_id, player_white_id, player_black_id, result, played_at";

pub fn insert_game(conn: &Connection, game: &NewGame) -> Result<Game> {
    insert_one(conn, game).context("Failed to insert game")
}

fn insert_one(conn: &Connection, game: &NewGame) -> rusqlite::Result<Game> {
    conn.query_row(
        INSERT_GAME_SQL,
        params![
            Uuid::new_v4(),
            game.tournament_id,
            game.player_white_id,
            game.player_black_id,
            game.result,
            game.played_at
        ],
        parse_game_row,
    )
}

/// Insert all games or none of them
pub fn insert_batch(conn: &Connection, games: &[NewGame]) -> Result<Vec<Game>> {
    let tx = conn
        .unchecked_transaction()
        .context("Failed to open game batch transaction")?;

    let mut created = Vec::with_capacity(games.len());
    for (idx, game) in games.iter().enumerate() {
        let row = insert_one(&tx, game)
            .with_context(|| format!("Failed to insert game {} of batch", idx + 1))?;
        created.push(row);
    }

    tx.commit().context("Failed to commit game batch")?;
    Ok(created)
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<Game> {
    Ok(Game {
        game_id: row.get(0)?,
        tournament_id: row.get(1)?,
        player_white_id: row.get(2)?,
        player_black_id: row.get(3)?,
        result: row.get(4)?,
        played_at: row.get(5)?,
    })
}

pub fn find_by_id(conn: &Connection, id: Uuid) -> Result<Option<Game>> {
    let sql = format!("SELECT {} FROM games WHERE game_id = ?1", GAME_COLUMNS);

    conn.query_row(&sql, params![id], parse_game_row)
        .optional()
        .context("Failed to query game by id")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Game>> {
    list_filtered(conn, &GameFilter::default())
}

/// Games in insertion order
pub fn list_filtered(conn: &Connection, filter: &GameFilter) -> Result<Vec<Game>> {
    let mut conditions = Conditions::new();
    conditions.push_opt("tournament_id = ?", filter.tournament_id);
    conditions.push_opt("(player_white_id = ? OR player_black_id = ?)", filter.player_id);
    conditions.push_opt("result = ?", filter.result);
    conditions.push_opt("date(played_at) = ?", filter.played_on);

    let sql = format!(
        "SELECT {} FROM games {} ORDER BY rowid",
        GAME_COLUMNS,
        conditions.where_clause()
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(conditions.params(), parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list games")?;

    Ok(rows)
}

pub fn list_by_tournament(conn: &Connection, tournament_id: Uuid) -> Result<Vec<Game>> {
    list_filtered(
        conn,
        &GameFilter {
            tournament_id: Some(tournament_id),
            ..Default::default()
        },
    )
}

pub fn list_by_player(conn: &Connection, player_id: Uuid) -> Result<Vec<Game>> {
    list_filtered(
        conn,
        &GameFilter {
            player_id: Some(player_id),
            ..Default::default()
        },
    )
}

/// Games where the two players faced each other, in either colour
pub fn list_joint(conn: &Connection, player1_id: Uuid, player2_id: Uuid) -> Result<Vec<Game>> {
    let sql = format!(
        "SELECT {} FROM games
         WHERE (player_white_id = ?1 AND player_black_id = ?2)
            OR (player_white_id = ?2 AND player_black_id = ?1)
         ORDER BY rowid",
        GAME_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![player1_id, player2_id], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list joint games")?;

    Ok(rows)
}

pub fn update_game(conn: &Connection, game: &Game) -> Result<bool> {
    let sql = "UPDATE games SET tournament_id = ?2, player_white_id = ?3, player_black_id = ?4, result = ?5, played_at = ?6 WHERE game_id = ?1";

    let changed = conn
        .execute(
            sql,
            params![
                game.game_id,
                game.tournament_id,
                game.player_white_id,
                game.player_black_id,
                game.result,
                game.played_at
            ],
        )
        .context("Failed to update game")?;

    Ok(changed > 0)
}

pub fn delete_by_id(conn: &Connection, id: Uuid) -> Result<bool> {
    let changed = conn
        .execute("DELETE FROM games WHERE game_id = ?1", params![id])
        .context("Failed to delete game")?;

    Ok(changed > 0)
}
