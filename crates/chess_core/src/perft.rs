use crate::{board::Board, movegen::all_legal_moves, types::Color};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, with
/// `side` to move first and colors alternating each ply.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&mv| perft(&board.apply_move(mv), side.other(), depth - 1))
        .sum()
}

/// Per-root-move breakdown, handy for locating generator bugs.
pub fn perft_divide(board: &Board, side: Color, depth: u8) -> Vec<(crate::types::Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    all_legal_moves(board, side)
        .into_iter()
        .map(|mv| (mv, perft(&board.apply_move(mv), side.other(), depth - 1)))
        .collect()
}
