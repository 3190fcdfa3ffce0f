use std::collections::HashMap;

use uuid::Uuid;

use super::classify::{classify, opponent_of, Participation};
use crate::config::TotalGames;
use crate::domain::Game;

/// Per-player tally of won, lost, drawn and still pending games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub pending: u32,
}

impl OutcomeCounts {
    pub fn for_player<'a, I>(player_id: Uuid, games: I) -> Self
    where
        I: IntoIterator<Item = &'a Game>,
    {
        let mut counts = Self::default();
        for game in games {
            counts.record(classify(game, player_id));
        }
        counts
    }

    pub fn record(&mut self, participation: Participation) {
        match participation {
            Participation::Won => self.wins += 1,
            Participation::Lost => self.losses += 1,
            Participation::Drew => self.draws += 1,
            Participation::Pending => self.pending += 1,
            Participation::NotParticipated => {}
        }
    }

    pub fn decided(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    pub fn participated(&self) -> u32 {
        self.decided() + self.pending
    }

    pub fn total(&self, policy: TotalGames) -> u32 {
        match policy {
            TotalGames::AllParticipated => self.participated(),
            TotalGames::DecidedOnly => self.decided(),
        }
    }

    pub fn win_rate(&self, policy: TotalGames) -> Option<f64> {
        win_rate(self.wins, self.draws, self.total(policy))
    }
}

/// Percentage score where a draw is worth half a win
pub fn win_rate(wins: u32, draws: u32, total: u32) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some((f64::from(wins) + f64::from(draws) * 0.5) * 100.0 / f64::from(total))
}

/// Wins per loss; an unbeaten player scores their raw win count
pub fn win_loss_ratio(wins: u32, losses: u32) -> f64 {
    if losses > 0 {
        f64::from(wins) / f64::from(losses)
    } else {
        f64::from(wins)
    }
}

pub fn draw_percent(draws: u32, total: u32) -> f64 {
    if total > 0 {
        f64::from(draws) / f64::from(total)
    } else {
        0.0
    }
}

/// Everything the leaderboard needs about one player, gathered in a
/// single pass over the games.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerTally {
    pub counts: OutcomeCounts,
    opponent_rating_sum: i64,
    rated_opponents: u32,
}

impl PlayerTally {
    pub fn avg_opponent_rating(&self) -> Option<f64> {
        if self.rated_opponents == 0 {
            return None;
        }
        Some(self.opponent_rating_sum as f64 / f64::from(self.rated_opponents))
    }
}

/// Tally every seated player across `games`. Opponents missing from
/// `ratings` do not contribute to the average opponent rating.
pub fn tally_players(games: &[Game], ratings: &HashMap<Uuid, i64>) -> HashMap<Uuid, PlayerTally> {
    let mut tallies: HashMap<Uuid, PlayerTally> = HashMap::new();

    for game in games {
        let seats = [game.player_white_id, game.player_black_id];
        for player_id in seats.into_iter().flatten() {
            let tally = tallies.entry(player_id).or_default();
            tally.counts.record(classify(game, player_id));

            if let Some(rating) = opponent_of(game, player_id).and_then(|id| ratings.get(&id)) {
                tally.opponent_rating_sum += rating;
                tally.rated_opponents += 1;
            }
        }
    }

    tallies
}
