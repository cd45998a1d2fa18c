use std::fmt;

use crate::error::{ChessError, Result};
use crate::types::*;

/// An 8x8 mailbox board addressed `[row][col]`.
///
/// `Board` is a plain value: it is `Copy`, and every operation that produces a
/// new position returns a fresh board instead of mutating the one it was given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting position: black on rows 0-1, white on rows 6-7.
    pub fn initial() -> Self {
        let mut b = Board::empty();

        // Pawns
        for col in 0..8 {
            b.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            b.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
        }
        // Back ranks
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.cells[0][col] = Some(Piece::new(kind, Color::Black));
            b.cells[7][col] = Some(Piece::new(kind, Color::White));
        }
        b
    }

    /// Parse the piece-placement field of a FEN string.
    ///
    /// The first rank listed (rank 8) is row 0, so the text reads top-down the
    /// same way the board is stored. Anything after the first space is ignored.
    pub fn from_placement(text: &str) -> Result<Self> {
        let placement = text.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if d == 0 {
                        return Err(ChessError::ZeroGap { rank: 8 - row });
                    }
                    col += d as usize;
                } else {
                    let pc = Piece::from_symbol(ch).ok_or(ChessError::InvalidPiece(ch))?;
                    if col < 8 {
                        board.cells[row][col] = Some(pc);
                    }
                    col += 1;
                }
                if col > 8 {
                    return Err(ChessError::FileCount {
                        rank: 8 - row,
                        files: col,
                    });
                }
            }
            if col != 8 {
                return Err(ChessError::FileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_placement`].
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for (row, rank) in self.cells.iter().enumerate() {
            let mut gap = 0;
            for cell in rank {
                match cell {
                    Some(pc) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(pc.symbol());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    /// Checks that each color has exactly one king.
    ///
    /// Rules queries do not call this; a board without a king simply reports
    /// "not in check". Entry points that accept outside boards validate first.
    pub fn validate(&self) -> Result<()> {
        for color in Color::ALL {
            let count = self
                .pieces()
                .filter(|(_, pc)| pc.color == color && pc.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(ChessError::KingCount { color, count });
            }
        }
        Ok(())
    }

    /// `None` for an empty square or one off the board.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells
            .get(sq.row as usize)
            .and_then(|rank| rank.get(sq.col as usize))
            .copied()
            .flatten()
    }

    /// Ignored for a square off the board.
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        if let Some(cell) = self
            .cells
            .get_mut(sq.row as usize)
            .and_then(|rank| rank.get_mut(sq.col as usize))
        {
            *cell = pc;
        }
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    pub fn piece_count(&self, c: Color) -> usize {
        self.pieces().filter(|(_, pc)| pc.color == c).count()
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Move whatever stands on `from` to `to`, capturing implicitly.
    /// No promotion and no legality check; used to probe hypothetical positions.
    /// A square off the board leaves the position unchanged.
    pub fn relocate(&self, from: Square, to: Square) -> Board {
        if !from.is_on_board() || !to.is_on_board() {
            return *self;
        }
        let mut next = *self;
        let moved = next.piece_at(from);
        next.set_piece(to, moved);
        next.set_piece(from, None);
        next
    }

    /// Commit a move: relocate the piece, then auto-queen a pawn that reached
    /// the far row. The caller is responsible for having checked legality.
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut next = self.relocate(mv.from, mv.to);
        if let Some(pc) = next.piece_at(mv.to)
            && pc.kind == PieceKind::Pawn
            && mv.to.row == pc.color.promotion_row()
        {
            next.set_piece(mv.to, Some(Piece::new(PieceKind::Queen, pc.color)));
        }
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.cells.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in rank {
                let ch = cell.map(Piece::symbol).unwrap_or('.');
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Fresh starting position.
pub fn create_initial_board() -> Board {
    Board::initial()
}

/// Produce the board after moving `from` to `to`, with auto-queen promotion.
pub fn apply_move(board: &Board, from: Square, to: Square) -> Board {
    board.apply_move(Move::new(from, to))
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
