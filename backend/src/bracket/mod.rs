//! Single-elimination first round drawing.
//!
//! The pool is shuffled, cut down to the largest power of two that fits and
//! paired off in order. Randomness is injected so a seeded generator gives a
//! repeatable draw.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::Player;
use crate::errors::{AppError, AppResult};

pub const MIN_PLAYERS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Pairing {
    pub white: Player,
    pub black: Player,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BracketDraw {
    pub pairings: Vec<Pairing>,
    /// Players left over after cutting the pool to the bracket size
    pub excluded: Vec<Player>,
}

/// Largest power of two not above `pool`; zero for an empty pool
pub fn bracket_size(pool: usize) -> usize {
    if pool == 0 {
        0
    } else {
        1 << pool.ilog2()
    }
}

pub fn draw_bracket<R>(mut players: Vec<Player>, rng: &mut R) -> AppResult<BracketDraw>
where
    R: Rng + ?Sized,
{
    if players.len() < MIN_PLAYERS {
        return Err(AppError::validation("at least two players are required"));
    }

    players.shuffle(rng);
    let excluded = players.split_off(bracket_size(players.len()));

    let mut seats = players.into_iter();
    let mut pairings = Vec::with_capacity(seats.len() / 2);
    while let (Some(white), Some(black)) = (seats.next(), seats.next()) {
        pairings.push(Pairing { white, black });
    }

    Ok(BracketDraw { pairings, excluded })
}
