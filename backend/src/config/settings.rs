use anyhow::{bail, Context, Result};
use std::env;

/// Which games count toward a player's total when computing win rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TotalGames {
    /// Every game the player sat in, pending ones included
    #[default]
    AllParticipated,
    /// Only games with a recorded result
    DecidedOnly,
}

impl TotalGames {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "all" => Ok(TotalGames::AllParticipated),
            "decided" => Ok(TotalGames::DecidedOnly),
            other => bail!("Unknown total games policy '{}', expected 'all' or 'decided'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "chess_tournaments.db".to_string(),
            pool_size: 8,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatsSettings {
    pub total_games: TotalGames,
}

#[derive(Debug, Clone, Default)]
pub struct BracketSettings {
    /// Fixed shuffle seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

/// Rating adjustments applied when a game result is first recorded
#[derive(Debug, Clone)]
pub struct RatingSettings {
    pub win_change: i64,
    pub loss_change: i64,
    pub draw_change: i64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            win_change: 10,
            loss_change: -9,
            draw_change: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub stats: StatsSettings,
    pub bracket: BracketSettings,
    pub rating: RatingSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::default(),
            stats: StatsSettings::default(),
            bracket: BracketSettings::default(),
            rating: RatingSettings::default(),
        }
    }

    /// Defaults overridden by `DATABASE_PATH`, `DATABASE_POOL_SIZE`,
    /// `BRACKET_SEED` and `STATS_TOTAL_GAMES`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = lookup("DATABASE_PATH") {
            config.database.path = path;
        }
        if let Some(size) = lookup("DATABASE_POOL_SIZE") {
            config.database.pool_size = size
                .parse()
                .with_context(|| format!("Invalid DATABASE_POOL_SIZE: {}", size))?;
        }
        if let Some(seed) = lookup("BRACKET_SEED") {
            let seed = seed
                .parse()
                .with_context(|| format!("Invalid BRACKET_SEED: {}", seed))?;
            config.bracket.seed = Some(seed);
        }
        if let Some(policy) = lookup("STATS_TOTAL_GAMES") {
            config.stats.total_games = TotalGames::parse(&policy)?;
        }

        Ok(config)
    }
}
