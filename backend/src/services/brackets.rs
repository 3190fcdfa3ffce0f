use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use uuid::Uuid;

use crate::bracket::draw_bracket;
use crate::config::settings::BracketSettings;
use crate::database::{GameStore, PlayerStore, TournamentStore};
use crate::domain::{Game, NewGame, Player};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedBracket {
    pub tournament_id: Uuid,
    pub games_created: usize,
    pub games: Vec<Game>,
    pub excluded: Vec<Player>,
}

pub struct BracketService {
    seed: Option<u64>,
}

impl BracketService {
    pub fn new(settings: &BracketSettings) -> Self {
        Self { seed: settings.seed }
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn generate<S>(&self, store: &S, tournament_id: Uuid) -> AppResult<GeneratedBracket>
    where
        S: PlayerStore + GameStore + TournamentStore + ?Sized,
    {
        self.generate_with(store, tournament_id, &mut self.rng())
    }

    /// Draw a first round from every registered player and persist it as
    /// pending games in one batch.
    pub fn generate_with<S, R>(&self, store: &S, tournament_id: Uuid, rng: &mut R) -> AppResult<GeneratedBracket>
    where
        S: PlayerStore + GameStore + TournamentStore + ?Sized,
        R: Rng + ?Sized,
    {
        let tournament = store
            .get_tournament(tournament_id)?
            .ok_or_else(|| AppError::not_found("tournament", tournament_id))?;

        let pool = store.list_players()?;
        let draw = draw_bracket(pool, rng)?;

        let new_games: Vec<NewGame> = draw
            .pairings
            .iter()
            .map(|pairing| NewGame::pending(tournament_id, pairing.white.player_id, pairing.black.player_id))
            .collect();
        let games = store.create_game_batch(&new_games)?;

        info!(
            "Bracket for '{}': {} games created, {} players left out",
            tournament.name,
            games.len(),
            draw.excluded.len()
        );

        Ok(GeneratedBracket {
            tournament_id,
            games_created: games.len(),
            games,
            excluded: draw.excluded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_support::{memory_db, seed_player, seed_tournament};
    use std::collections::HashSet;

    #[test]
    fn test_five_players_make_two_games() {
        let conn = memory_db();
        let tournament = seed_tournament(&conn, "Knockout");
        for (i, name) in ["Ann", "Ben", "Cat", "Dan", "Eve"].iter().enumerate() {
            seed_player(&conn, name, 1200 + i as i64 * 50);
        }

        let bracket = BracketService::with_seed(Some(3))
            .generate(&conn, tournament.tournament_id)
            .unwrap();

        assert_eq!(bracket.games_created, 2);
        assert_eq!(bracket.excluded.len(), 1);

        let stored = conn.list_games_by_tournament(tournament.tournament_id).unwrap();
        assert_eq!(stored, bracket.games);

        let mut seated = HashSet::new();
        for game in &stored {
            assert!(game.is_pending());
            assert_eq!(game.played_at, None);
            assert!(seated.insert(game.player_white_id.unwrap()));
            assert!(seated.insert(game.player_black_id.unwrap()));
        }
        assert!(!seated.contains(&bracket.excluded[0].player_id));
    }

    #[test]
    fn test_single_player_creates_nothing() {
        let conn = memory_db();
        let tournament = seed_tournament(&conn, "Lonely Open");
        seed_player(&conn, "Solo", 1500);

        let result = BracketService::with_seed(Some(1)).generate(&conn, tournament.tournament_id);

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(conn.list_games_by_tournament(tournament.tournament_id).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_tournament() {
        let conn = memory_db();
        seed_player(&conn, "Ann", 1500);
        seed_player(&conn, "Ben", 1500);

        let result = BracketService::with_seed(None).generate(&conn, Uuid::new_v4());
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let first = memory_db();
        let second = memory_db();
        let mut pairs = Vec::new();

        for conn in [&first, &second] {
            let tournament = seed_tournament(conn, "Seeded");
            for name in ["Ann", "Ben", "Cat", "Dan"] {
                seed_player(conn, name, 1500);
            }
            let bracket = BracketService::with_seed(Some(99))
                .generate(conn, tournament.tournament_id)
                .unwrap();
            let names: Vec<(String, String)> = bracket
                .games
                .iter()
                .map(|g| {
                    let name = |id: Option<Uuid>| conn.get_player(id.unwrap()).unwrap().unwrap().first_name;
                    (name(g.player_white_id), name(g.player_black_id))
                })
                .collect();
            pairs.push(names);
        }

        assert_eq!(pairs[0], pairs[1]);
    }

    #[test]
    fn test_unseeded_draws_vary() {
        let conn = memory_db();
        for i in 0..8 {
            seed_player(&conn, &format!("Player{i}"), 1500);
        }

        let draws: HashSet<Vec<(Option<Uuid>, Option<Uuid>)>> = (0..5)
            .map(|round| {
                let tournament = seed_tournament(&conn, &format!("Open {round}"));
                BracketService::with_seed(None)
                    .generate(&conn, tournament.tournament_id)
                    .unwrap()
                    .games
                    .iter()
                    .map(|g| (g.player_white_id, g.player_black_id))
                    .collect()
            })
            .collect();

        assert!(draws.len() > 1);
    }
}
