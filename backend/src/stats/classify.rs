use uuid::Uuid;

use crate::domain::{Game, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    White,
    Black,
}

/// How a single game counts for one player. Exactly one applies to any
/// (player, game) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participation {
    NotParticipated,
    Pending,
    Won,
    Lost,
    Drew,
}

impl Participation {
    pub fn participated(self) -> bool {
        self != Participation::NotParticipated
    }
}

pub fn role_of(game: &Game, player_id: Uuid) -> Option<Role> {
    if game.player_white_id == Some(player_id) {
        Some(Role::White)
    } else if game.player_black_id == Some(player_id) {
        Some(Role::Black)
    } else {
        None
    }
}

pub fn classify(game: &Game, player_id: Uuid) -> Participation {
    let Some(role) = role_of(game, player_id) else {
        return Participation::NotParticipated;
    };

    match (role, game.result) {
        (_, None) => Participation::Pending,
        (_, Some(GameResult::Draw)) => Participation::Drew,
        (Role::White, Some(GameResult::WhiteWin)) | (Role::Black, Some(GameResult::BlackWin)) => {
            Participation::Won
        }
        (Role::White, Some(GameResult::BlackWin)) | (Role::Black, Some(GameResult::WhiteWin)) => {
            Participation::Lost
        }
    }
}

/// The player on the other side of the board, when there is one
pub fn opponent_of(game: &Game, player_id: Uuid) -> Option<Uuid> {
    match role_of(game, player_id)? {
        Role::White => game.player_black_id,
        Role::Black => game.player_white_id,
    }
}
