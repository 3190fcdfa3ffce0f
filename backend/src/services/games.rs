use anyhow::Context;
use log::{debug, info};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use uuid::Uuid;

use crate::config::settings::RatingSettings;
use crate::database::{games, players, tournaments, GameFilter};
use crate::domain::{Game, GameResult, GameUpdate, NewGame};
use crate::errors::{AppError, AppResult};

/// Rating change for each seated player once `result` is known. Vacant
/// seats are skipped.
pub fn rating_changes(
    white: Option<Uuid>,
    black: Option<Uuid>,
    result: GameResult,
    settings: &RatingSettings,
) -> Vec<(Uuid, i64)> {
    let (white_change, black_change) = match result {
        GameResult::WhiteWin => (settings.win_change, settings.loss_change),
        GameResult::BlackWin => (settings.loss_change, settings.win_change),
        GameResult::Draw => (settings.draw_change, settings.draw_change),
    };

    [(white, white_change), (black, black_change)]
        .into_iter()
        .filter_map(|(seat, change)| seat.map(|id| (id, change)))
        .collect()
}

fn apply_rating_changes(conn: &Connection, game: &Game, settings: &RatingSettings) -> AppResult<()> {
    let Some(result) = game.result else {
        return Ok(());
    };

    for (player_id, delta) in rating_changes(game.player_white_id, game.player_black_id, result, settings) {
        players::adjust_rating(conn, player_id, delta)?;
        debug!("Rating of {} moved by {} after game {}", player_id, delta, game.game_id);
    }
    Ok(())
}

fn ensure_tournament(conn: &Connection, id: Uuid) -> AppResult<()> {
    tournaments::find_by_id(conn, id)?
        .map(|_| ())
        .ok_or_else(|| AppError::not_found("tournament", id))
}

fn ensure_player(conn: &Connection, id: Option<Uuid>) -> AppResult<()> {
    match id {
        Some(id) => players::find_by_id(conn, id)?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("player", id)),
        None => Ok(()),
    }
}

/// Store a game; a game created with a result adjusts both ratings in the
/// same transaction.
pub fn create_game(conn: &Connection, new_game: &NewGame, settings: &RatingSettings) -> AppResult<Game> {
    if new_game.player_white_id.is_some() && new_game.player_white_id == new_game.player_black_id {
        return Err(AppError::validation("a player cannot play against themselves"));
    }
    ensure_tournament(conn, new_game.tournament_id)?;
    ensure_player(conn, new_game.player_white_id)?;
    ensure_player(conn, new_game.player_black_id)?;

    let tx = conn
        .unchecked_transaction()
        .context("Failed to open game transaction")?;
    let game = games::insert_game(&tx, new_game)?;
    apply_rating_changes(&tx, &game, settings)?;
    tx.commit().context("Failed to commit game")?;

    info!("Created game {} in tournament {}", game.game_id, game.tournament_id);
    Ok(game)
}

pub fn get_game(conn: &Connection, id: Uuid) -> AppResult<Game> {
    games::find_by_id(conn, id)?.ok_or_else(|| AppError::not_found("game", id))
}

pub fn list_games(conn: &Connection, filter: &GameFilter) -> AppResult<Vec<Game>> {
    Ok(games::list_filtered(conn, filter)?)
}

/// Partial update. Ratings move only when a pending game receives its
/// first result; a recorded result cannot be cleared.
pub fn update_game(
    conn: &Connection,
    id: Uuid,
    update: &GameUpdate,
    settings: &RatingSettings,
) -> AppResult<Game> {
    // Immediate: the pending check and the rating change must see the same row
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .context("Failed to open game transaction")?;
    let mut game = get_game(&tx, id)?;
    let first_result = game.is_pending() && update.result.is_some();

    if let Some(tournament_id) = update.tournament_id {
        ensure_tournament(&tx, tournament_id)?;
        game.tournament_id = tournament_id;
    }
    if let Some(result) = update.result {
        game.result = Some(result);
    }
    if let Some(played_at) = update.played_at {
        game.played_at = Some(played_at);
    }

    if !games::update_game(&tx, &game)? {
        return Err(AppError::not_found("game", id));
    }
    if first_result {
        apply_rating_changes(&tx, &game, settings)?;
    }
    tx.commit().context("Failed to commit game update")?;

    info!("Updated game {}", id);
    Ok(game)
}

pub fn delete_game(conn: &Connection, id: Uuid) -> AppResult<()> {
    if !games::delete_by_id(conn, id)? {
        return Err(AppError::not_found("game", id));
    }
    info!("Deleted game {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{game_between, memory_db, seed_players, seed_tournament};
    use std::sync::{Arc, Barrier};
    use std::thread;

    use crate::database::{create_pool, get_connection, setup};
    use crate::services::players::get_player;

    #[test]
    fn test_rating_changes_by_result() {
        let settings = RatingSettings::default();
        let (w, b) = (Uuid::new_v4(), Uuid::new_v4());

        assert_eq!(
            rating_changes(Some(w), Some(b), GameResult::WhiteWin, &settings),
            vec![(w, 10), (b, -9)]
        );
        assert_eq!(
            rating_changes(Some(w), Some(b), GameResult::BlackWin, &settings),
            vec![(w, -9), (b, 10)]
        );
        assert_eq!(
            rating_changes(Some(w), None, GameResult::Draw, &settings),
            vec![(w, 1)]
        );
    }

    #[test]
    fn test_first_result_moves_ratings_once() {
        let conn = memory_db();
        let settings = RatingSettings::default();
        let tournament = seed_tournament(&conn, "Rated Open");
        let [a, b, _] = seed_players(&conn);
        let game = create_game(&conn, &game_between(&tournament, &a, &b, None), &settings).unwrap();

        let record = GameUpdate {
            result: Some(GameResult::BlackWin),
            ..Default::default()
        };
        update_game(&conn, game.game_id, &record, &settings).unwrap();
        assert_eq!(get_player(&conn, a.player_id).unwrap().rating, 1491);
        assert_eq!(get_player(&conn, b.player_id).unwrap().rating, 1410);

        let correction = GameUpdate {
            result: Some(GameResult::Draw),
            ..Default::default()
        };
        let corrected = update_game(&conn, game.game_id, &correction, &settings).unwrap();
        assert_eq!(corrected.result, Some(GameResult::Draw));
        assert_eq!(get_player(&conn, a.player_id).unwrap().rating, 1491);
        assert_eq!(get_player(&conn, b.player_id).unwrap().rating, 1410);
    }

    #[test]
    fn test_created_with_result_moves_ratings() {
        let conn = memory_db();
        let settings = RatingSettings::default();
        let tournament = seed_tournament(&conn, "Blitz");
        let [a, b, _] = seed_players(&conn);

        create_game(
            &conn,
            &game_between(&tournament, &a, &b, Some(GameResult::Draw)),
            &settings,
        )
        .unwrap();

        assert_eq!(get_player(&conn, a.player_id).unwrap().rating, 1501);
        assert_eq!(get_player(&conn, b.player_id).unwrap().rating, 1401);
    }

    #[test]
    fn test_create_validates_references() {
        let conn = memory_db();
        let settings = RatingSettings::default();
        let tournament = seed_tournament(&conn, "Strict");
        let [a, b, _] = seed_players(&conn);

        let self_play = game_between(&tournament, &a, &a, None);
        assert!(matches!(
            create_game(&conn, &self_play, &settings),
            Err(AppError::Validation(_))
        ));

        let ghost = NewGame::pending(tournament.tournament_id, a.player_id, Uuid::new_v4());
        assert!(matches!(
            create_game(&conn, &ghost, &settings),
            Err(AppError::NotFound(_))
        ));

        let nowhere = NewGame::pending(Uuid::new_v4(), a.player_id, b.player_id);
        assert!(matches!(
            create_game(&conn, &nowhere, &settings),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_concurrent_first_results_move_ratings_once() {
        let path = std::env::temp_dir().join(format!("games-{}.db", Uuid::new_v4()));
        let pool = create_pool(path.to_str().unwrap(), 2).unwrap();
        let settings = RatingSettings::default();
        let (game_id, white_id, black_id) = {
            let conn = get_connection(&pool).unwrap();
            setup::init_database(&conn).unwrap();
            let tournament = seed_tournament(&conn, "Race");
            let [a, b, _] = seed_players(&conn);
            let game = create_game(&conn, &game_between(&tournament, &a, &b, None), &settings).unwrap();
            (game.game_id, a.player_id, b.player_id)
        };

        let barrier = Arc::new(Barrier::new(2));
        let writers: Vec<_> = (0..2)
            .map(|_| {
                let conn = get_connection(&pool).unwrap();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let record = GameUpdate {
                        result: Some(GameResult::WhiteWin),
                        ..Default::default()
                    };
                    barrier.wait();
                    update_game(&conn, game_id, &record, &RatingSettings::default()).unwrap();
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let conn = get_connection(&pool).unwrap();
        assert_eq!(get_player(&conn, white_id).unwrap().rating, 1510);
        assert_eq!(get_player(&conn, black_id).unwrap().rating, 1391);
        drop(conn);
        drop(pool);
        let _ = std::fs::remove_file(&path);
    }
}
