//! Check, checkmate and stalemate queries.
//!
//! Attack detection reuses the raw move generator rather than the legality
//! filter, so `is_check` never recurses back into itself.

use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    movegen::{has_legal_move, pseudo_legal_into},
    types::*,
};

/// Where a side stands before it moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// `color`'s king is attacked by any opposing piece.
///
/// A board with no king of `color` reports `false`.
pub fn is_check(board: &Board, color: Color) -> bool {
    let ksq = match board.king_square(color) {
        Some(s) => s,
        None => return false,
    };
    let enemy = color.other();
    let mut buf = Vec::with_capacity(28);
    for (from, pc) in board.pieces() {
        if pc.color != enemy {
            continue;
        }
        buf.clear();
        pseudo_legal_into(board, from, &mut buf);
        if buf.contains(&ksq) {
            return true;
        }
    }
    false
}

pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_check(board, color) && !has_legal_move(board, color)
}

pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_check(board, color) && !has_legal_move(board, color)
}

/// Classify the position for `color` with a single check probe and a single
/// move scan. Exactly one variant holds for any board and color.
pub fn game_status(board: &Board, color: Color) -> GameStatus {
    let in_check = is_check(board, color);
    match (in_check, has_legal_move(board, color)) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::InProgress,
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
