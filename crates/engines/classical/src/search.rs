//! Minimax search with alpha-beta pruning

use chess_core::{all_legal_moves, game_status, Board, Color, GameStatus, Move};

use crate::eval::evaluate;

/// Score of a forced mate found at the root. Mates further down the tree are
/// scored `MATE_SCORE - ply`, so a quicker mate always outranks a slower one
/// and any mate outranks material.
pub const MATE_SCORE: i32 = 100_000;

const INFINITY: i32 = 1_000_000;

/// Searches the position and returns the best move for `color` with its score.
///
/// # Arguments
/// * `board` - The position to search
/// * `color` - The side to move, maximizing at the root
/// * `depth` - Maximum search depth in plies (0 is treated as 1)
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// `None` only when `color` has no legal move. Ties keep the first move in
/// generation order.
pub fn pick_best_move(
    board: &Board,
    color: Color,
    depth: u8,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let depth = depth.max(1);
    let moves = all_legal_moves(board, color);
    if moves.is_empty() {
        return None;
    }

    let mut best = moves[0];
    let mut best_score = -INFINITY;
    let mut alpha = -INFINITY;

    for mv in moves {
        let child = board.apply_move(mv);
        *nodes += 1;

        let score = minimax(&child, depth - 1, 1, alpha, INFINITY, false, color, nodes);

        if score > best_score {
            best_score = score;
            best = mv;
        }
        alpha = alpha.max(score);
    }
    Some((best, best_score))
}

/// Convenience wrapper around [`pick_best_move`] that drops the score.
pub fn best_move(board: &Board, color: Color, depth: u8) -> Option<Move> {
    let mut nodes = 0;
    pick_best_move(board, color, depth, &mut nodes).map(|(mv, _)| mv)
}

/// Recursive minimax, always scored from `color`'s point of view.
///
/// `maximizing` says whose turn it is at this node: `color` when true, the
/// opponent otherwise.
#[allow(clippy::too_many_arguments)]
fn minimax(
    board: &Board,
    depth: u8,
    ply: i32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    color: Color,
    nodes: &mut u64,
) -> i32 {
    let opponent = color.other();

    if depth == 0 {
        return evaluate(board, color);
    }

    let own = game_status(board, color);
    let theirs = game_status(board, opponent);
    if theirs == GameStatus::Checkmate {
        return MATE_SCORE - ply;
    }
    if own == GameStatus::Checkmate {
        return -MATE_SCORE + ply;
    }
    if theirs == GameStatus::Stalemate || own == GameStatus::Stalemate {
        return 0;
    }

    let to_act = if maximizing { color } else { opponent };
    let moves = all_legal_moves(board, to_act);
    if moves.is_empty() {
        return evaluate(board, color);
    }

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for mv in moves {
        let child = board.apply_move(mv);
        *nodes += 1;

        let score = minimax(&child, depth - 1, ply + 1, alpha, beta, !maximizing, color, nodes);

        if maximizing {
            if score > best {
                best = score;
            }
            alpha = alpha.max(score);
        } else {
            if score < best {
                best = score;
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
