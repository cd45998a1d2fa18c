use crate::{board::Board, rules::is_check, types::*};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const QUEEN_DIRS: [(i8, i8); 8] = KING_OFFSETS;

/// Every square the piece on `from` could reach under its movement rule,
/// ignoring whether its own king is left in check.
///
/// An empty square yields no moves. The order is fixed per piece type so
/// results are reproducible for a given board.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    pseudo_legal_into(board, from, &mut out);
    out
}

pub(crate) fn pseudo_legal_into(board: &Board, from: Square, out: &mut Vec<Square>) {
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_steps(board, from, pc.color, &KNIGHT_OFFSETS, out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &BISHOP_DIRS, out),
        PieceKind::Rook => gen_slider(board, from, pc.color, &ROOK_DIRS, out),
        PieceKind::Queen => gen_slider(board, from, pc.color, &QUEEN_DIRS, out),
        PieceKind::King => gen_steps(board, from, pc.color, &KING_OFFSETS, out),
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.forward();

    // forward 1, then forward 2 from the start row through an empty square
    if let Some(one) = from.offset(dir, 0)
        && board.piece_at(one).is_none()
    {
        out.push(one);
        if from.row == c.pawn_start_row()
            && let Some(two) = from.offset(2 * dir, 0)
            && board.piece_at(two).is_none()
        {
            out.push(two);
        }
    }

    // diagonal captures, enemy pieces only
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && let Some(target) = board.piece_at(to)
            && target.color != c
        {
            out.push(to);
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

/// Targets for the piece on `from` that do not leave `mover`'s king in check.
///
/// Returns nothing when `from` is empty or holds a piece of the other color.
/// Each candidate is probed on a relocated copy of the board; `board` itself
/// is never touched.
pub fn legal_moves(board: &Board, from: Square, mover: Color) -> Vec<Square> {
    match board.piece_at(from) {
        Some(pc) if pc.color == mover => {}
        _ => return Vec::new(),
    }
    let mut out = pseudo_legal_moves(board, from);
    out.retain(|&to| !is_check(&board.relocate(from, to), mover));
    out
}

/// `to` is one of the legal targets of the piece on `from`.
pub fn is_valid_move(board: &Board, from: Square, to: Square, mover: Color) -> bool {
    legal_moves(board, from, mover).contains(&to)
}

/// All legal moves for `mover`, scanning own pieces in row-major order.
pub fn all_legal_moves(board: &Board, mover: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(48);
    for (from, pc) in board.pieces() {
        if pc.color != mover {
            continue;
        }
        for to in legal_moves(board, from, mover) {
            out.push(Move::new(from, to));
        }
    }
    out
}

/// Whether `mover` has at least one legal move; stops at the first one found.
pub fn has_legal_move(board: &Board, mover: Color) -> bool {
    let mut buf = Vec::with_capacity(28);
    for (from, pc) in board.pieces() {
        if pc.color != mover {
            continue;
        }
        buf.clear();
        pseudo_legal_into(board, from, &mut buf);
        if buf
            .iter()
            .any(|&to| !is_check(&board.relocate(from, to), mover))
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
