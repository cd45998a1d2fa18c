pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::{ChessError, Result};
pub use movegen::*;
pub use perft::{perft, perft_divide};
pub use rules::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by every move picker
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the searching side's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

impl SearchResult {
    /// Result for a side with nothing to play.
    pub fn no_move(depth: u8) -> Self {
        Self {
            best_move: None,
            score: 0,
            depth,
            nodes: 0,
        }
    }
}

/// Limits handed to an engine for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self { depth }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Trait that all chess engines must implement.
///
/// The rules engine keeps no turn state, so the side to move is passed in
/// explicitly alongside the board.
pub trait Engine: Send {
    /// Pick a move for `side` on `board`.
    ///
    /// Returns `best_move: None` only when `side` has no legal move.
    fn search(&mut self, board: &Board, side: Color, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
