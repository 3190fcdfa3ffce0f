//! Aggregate queries over players and games.
//!
//! `StatsService` only talks to the store traits, so the same code runs
//! against a pooled SQLite connection or an in-memory test store.

use std::collections::HashMap;

use log::debug;
use uuid::Uuid;

use crate::config::TotalGames;
use crate::database::{GameStore, PlayerStore, SkillLevelStore, TournamentStore};
use crate::domain::{Player, Tournament};
use crate::errors::{AppError, AppResult};
use crate::stats::{
    draw_percent, tally_players, win_loss_ratio, HeadToHead, MatchRecord, OutcomeCounts,
    PlayerMatchHistory, PlayerSummary, TopPlayerStats, TournamentStanding,
};

pub struct StatsService {
    total_games: TotalGames,
}

impl StatsService {
    pub fn new(total_games: TotalGames) -> Self {
        Self { total_games }
    }

    fn require_player<S>(store: &S, id: Uuid) -> AppResult<Player>
    where
        S: PlayerStore + ?Sized,
    {
        store.get_player(id)?.ok_or_else(|| AppError::not_found("player", id))
    }

    /// Identity, title and win rate. A player whose rating falls outside
    /// every skill level has no summary.
    pub fn player_summary<S>(&self, store: &S, player_id: Uuid) -> AppResult<PlayerSummary>
    where
        S: PlayerStore + GameStore + SkillLevelStore + ?Sized,
    {
        let player = Self::require_player(store, player_id)?;
        let level = store.find_skill_level_by_rating(player.rating)?.ok_or_else(|| {
            AppError::NotFound(format!("no skill level covers rating {}", player.rating))
        })?;

        let games = store.list_games_by_player(player_id)?;
        let counts = OutcomeCounts::for_player(player_id, &games);

        Ok(PlayerSummary {
            player_id,
            first_name: player.first_name,
            last_name: player.last_name,
            rating: player.rating,
            title: level.title,
            total_games: counts.total(self.total_games),
            win_rate: counts.win_rate(self.total_games),
        })
    }

    /// Leaderboard of every player with at least one game, highest rated
    /// first. Ties keep registration order.
    pub fn top_players<S>(&self, store: &S) -> AppResult<Vec<TopPlayerStats>>
    where
        S: PlayerStore + GameStore + ?Sized,
    {
        let players = store.list_players()?;
        let games = store.list_all_games()?;
        let ratings: HashMap<Uuid, i64> = players.iter().map(|p| (p.player_id, p.rating)).collect();
        let tallies = tally_players(&games, &ratings);

        let mut rows: Vec<TopPlayerStats> = players
            .into_iter()
            .filter_map(|player| {
                let tally = tallies.get(&player.player_id)?;
                let counts = tally.counts;
                Some(TopPlayerStats {
                    player_id: player.player_id,
                    first_name: player.first_name,
                    last_name: player.last_name,
                    rating: player.rating,
                    wins: counts.wins,
                    losses: counts.losses,
                    draws: counts.draws,
                    win_loss: win_loss_ratio(counts.wins, counts.losses),
                    draw_percent: draw_percent(counts.draws, counts.participated()),
                    avg_opp_rating: tally.avg_opponent_rating(),
                })
            })
            .collect();

        rows.sort_by(|a, b| b.rating.cmp(&a.rating));
        debug!("Leaderboard built for {} of {} players", rows.len(), ratings.len());
        Ok(rows)
    }

    pub fn match_history<S>(&self, store: &S, player_id: Uuid) -> AppResult<PlayerMatchHistory>
    where
        S: PlayerStore + GameStore + ?Sized,
    {
        let player = Self::require_player(store, player_id)?;
        let games = store.list_games_by_player(player_id)?;

        let match_history = if games.is_empty() {
            None
        } else {
            Some(games.into_iter().map(MatchRecord::from).collect())
        };

        Ok(PlayerMatchHistory {
            player_id,
            first_name: player.first_name,
            last_name: player.last_name,
            match_history,
        })
    }

    /// Record of `player_id` against `opponent_id` over their joint games
    pub fn head_to_head<S>(&self, store: &S, player_id: Uuid, opponent_id: Uuid) -> AppResult<HeadToHead>
    where
        S: PlayerStore + GameStore + ?Sized,
    {
        if player_id == opponent_id {
            return Err(AppError::validation("head-to-head needs two different players"));
        }
        Self::require_player(store, player_id)?;
        Self::require_player(store, opponent_id)?;

        let games = store.list_joint_games(player_id, opponent_id)?;
        let counts = OutcomeCounts::for_player(player_id, &games);

        Ok(HeadToHead {
            player_id,
            opponent_id,
            games: counts.participated(),
            wins: counts.wins,
            losses: counts.losses,
            draws: counts.draws,
        })
    }

    pub fn tournament_standings<S>(&self, store: &S, tournament_id: Uuid) -> AppResult<Vec<TournamentStanding>>
    where
        S: PlayerStore + GameStore + TournamentStore + ?Sized,
    {
        let tournament = store
            .get_tournament(tournament_id)?
            .ok_or_else(|| AppError::not_found("tournament", tournament_id))?;
        self.standings_for(store, &tournament)
    }

    pub fn tournament_standings_by_name<S>(&self, store: &S, name: &str) -> AppResult<Vec<TournamentStanding>>
    where
        S: PlayerStore + GameStore + TournamentStore + ?Sized,
    {
        let tournament = store
            .get_tournament_by_name(name)?
            .ok_or_else(|| AppError::not_found("tournament", format!("'{name}'")))?;
        self.standings_for(store, &tournament)
    }

    fn standings_for<S>(&self, store: &S, tournament: &Tournament) -> AppResult<Vec<TournamentStanding>>
    where
        S: PlayerStore + GameStore + ?Sized,
    {
        let games = store.list_games_by_tournament(tournament.tournament_id)?;
        let game_ids: Vec<Uuid> = games.iter().map(|g| g.game_id).collect();
        let participants = store.list_players_by_games(&game_ids)?;

        let standings = participants
            .into_iter()
            .map(|player| {
                let counts = OutcomeCounts::for_player(player.player_id, &games);
                TournamentStanding::new(player, counts.wins, counts.losses, counts.draws)
            })
            .collect::<Vec<_>>();

        debug!(
            "Tournament '{}': {} games, {} participants",
            tournament.name,
            games.len(),
            standings.len()
        );
        Ok(standings)
    }
}
