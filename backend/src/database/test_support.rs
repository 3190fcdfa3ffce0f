use chrono::NaiveDate;
use rusqlite::Connection;

use super::{players, setup, tournaments};
use crate::domain::{GameResult, NewGame, NewPlayer, NewTournament, Player, SkillLevel, Tournament};

pub fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    setup::init_database(&conn).unwrap();
    conn
}

pub fn new_player(first_name: &str, last_name: &str, rating: i64) -> NewPlayer {
    NewPlayer {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        rating,
    }
}

pub fn new_tournament(name: &str) -> NewTournament {
    NewTournament {
        name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 5, 7).unwrap(),
        location: "Wijk aan Zee".to_string(),
    }
}

pub fn skill_level(title: &str, lower: i64, upper: i64) -> SkillLevel {
    SkillLevel {
        title: title.to_string(),
        rating_lower_bound: lower,
        rating_upper_bound: upper,
    }
}

pub fn seed_tournament(conn: &Connection, name: &str) -> Tournament {
    tournaments::insert_tournament(conn, &new_tournament(name)).unwrap()
}

pub fn seed_player(conn: &Connection, first_name: &str, rating: i64) -> Player {
    players::insert_player(conn, &new_player(first_name, "Tester", rating)).unwrap()
}

pub fn seed_players(conn: &Connection) -> [Player; 3] {
    [
        seed_player(conn, "Alice", 1500),
        seed_player(conn, "Bob", 1400),
        seed_player(conn, "Carol", 1300),
    ]
}

pub fn game_between(
    tournament: &Tournament,
    white: &Player,
    black: &Player,
    result: Option<GameResult>,
) -> NewGame {
    NewGame {
        result,
        ..NewGame::pending(tournament.tournament_id, white.player_id, black.player_id)
    }
}
