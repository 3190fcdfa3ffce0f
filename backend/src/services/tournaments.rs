use chrono::NaiveDate;
use log::info;
use rusqlite::Connection;
use uuid::Uuid;

use crate::database::{games, tournaments, TournamentFilter};
use crate::domain::{NewTournament, Tournament, TournamentUpdate};
use crate::errors::{constraint_as_conflict, AppError, AppResult};

fn validate(name: &str, start_date: NaiveDate, end_date: NaiveDate) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("tournament name must not be empty"));
    }
    if end_date < start_date {
        return Err(AppError::validation(format!(
            "end date {end_date} is before start date {start_date}"
        )));
    }
    Ok(())
}

fn duplicate_name(name: &str) -> String {
    format!("tournament '{name}' already exists")
}

pub fn create_tournament(conn: &Connection, new_tournament: &NewTournament) -> AppResult<Tournament> {
    validate(&new_tournament.name, new_tournament.start_date, new_tournament.end_date)?;

    let tournament = tournaments::insert_tournament(conn, new_tournament)
        .map_err(|e| constraint_as_conflict(e, &duplicate_name(&new_tournament.name)))?;
    info!("Created tournament '{}' ({})", tournament.name, tournament.tournament_id);
    Ok(tournament)
}

pub fn get_tournament(conn: &Connection, id: Uuid) -> AppResult<Tournament> {
    tournaments::find_by_id(conn, id)?.ok_or_else(|| AppError::not_found("tournament", id))
}

/// All tournaments, or the single one matching the name filter
pub fn list_tournaments(conn: &Connection, filter: &TournamentFilter) -> AppResult<Vec<Tournament>> {
    match &filter.name {
        Some(name) => Ok(tournaments::find_by_name(conn, name)?.into_iter().collect()),
        None => Ok(tournaments::list_all(conn)?),
    }
}

pub fn update_tournament(
    conn: &Connection,
    id: Uuid,
    update: &TournamentUpdate,
) -> AppResult<Tournament> {
    let mut tournament = get_tournament(conn, id)?;

    if let Some(name) = &update.name {
        tournament.name = name.clone();
    }
    if let Some(start_date) = update.start_date {
        tournament.start_date = start_date;
    }
    if let Some(end_date) = update.end_date {
        tournament.end_date = end_date;
    }
    if let Some(location) = &update.location {
        tournament.location = location.clone();
    }
    validate(&tournament.name, tournament.start_date, tournament.end_date)?;

    let updated = tournaments::update_tournament(conn, &tournament)
        .map_err(|e| constraint_as_conflict(e, &duplicate_name(&tournament.name)))?;
    if !updated {
        return Err(AppError::not_found("tournament", id));
    }
    info!("Updated tournament {}", id);
    Ok(tournament)
}

/// Refused while any game still belongs to the tournament
pub fn delete_tournament(conn: &Connection, id: Uuid) -> AppResult<()> {
    let scheduled = games::list_by_tournament(conn, id)?;
    if !scheduled.is_empty() {
        return Err(AppError::conflict(format!(
            "tournament {id} still has {} games",
            scheduled.len()
        )));
    }

    if !tournaments::delete_by_id(conn, id)? {
        return Err(AppError::not_found("tournament", id));
    }
    info!("Deleted tournament {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::games::insert_game;
    use crate::database::test_support::{game_between, memory_db, new_tournament, seed_players};

    #[test]
    fn test_dates_must_be_ordered() {
        let conn = memory_db();
        let mut backwards = new_tournament("Backwards Open");
        std::mem::swap(&mut backwards.start_date, &mut backwards.end_date);

        assert!(matches!(
            create_tournament(&conn, &backwards),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_duplicate_name_is_conflict() {
        let conn = memory_db();
        create_tournament(&conn, &new_tournament("Tata Steel")).unwrap();

        assert!(matches!(
            create_tournament(&conn, &new_tournament("Tata Steel")),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn test_rename_onto_existing_name_is_conflict() {
        let conn = memory_db();
        create_tournament(&conn, &new_tournament("Candidates")).unwrap();
        let other = create_tournament(&conn, &new_tournament("Olympiad")).unwrap();

        let rename = TournamentUpdate {
            name: Some("Candidates".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            update_tournament(&conn, other.tournament_id, &rename),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn test_delete_refused_while_games_exist() {
        let conn = memory_db();
        let tournament = create_tournament(&conn, &new_tournament("Busy Cup")).unwrap();
        let [a, b, _] = seed_players(&conn);
        insert_game(&conn, &game_between(&tournament, &a, &b, None)).unwrap();

        assert!(matches!(
            delete_tournament(&conn, tournament.tournament_id),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn test_name_filter() {
        let conn = memory_db();
        let tournament = create_tournament(&conn, &new_tournament("Sinquefield")).unwrap();
        create_tournament(&conn, &new_tournament("Norway Chess")).unwrap();

        let filtered = list_tournaments(
            &conn,
            &TournamentFilter {
                name: Some("Sinquefield".to_string()),
            },
        )
        .unwrap();
        assert_eq!(filtered, vec![tournament]);

        let all = list_tournaments(&conn, &TournamentFilter::default()).unwrap();
        assert_eq!(all.len(), 2);
    }
}
