//! Error types for board construction and parsing.
//!
//! Rules queries themselves never fail: an empty square or a missing king
//! degrades to an empty move list or `false`. These errors only cover turning
//! outside input into a `Board`.

use thiserror::Error;

use crate::types::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid square label: {0:?}")]
    InvalidSquare(String),

    #[error("square ({row}, {col}) is off the board")]
    SquareOutOfRange { row: u8, col: u8 },

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("invalid piece letter {0:?} in board placement")]
    InvalidPiece(char),

    #[error("board placement must have 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} of board placement has a zero-length gap")]
    ZeroGap { rank: usize },

    #[error("rank {rank} of board placement covers {files} files, expected 8")]
    FileCount { rank: usize, files: usize },

    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },
}

pub type Result<T> = std::result::Result<T, ChessError>;
