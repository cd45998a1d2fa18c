//! Classical Chess Engine
//!
//! Minimax search with alpha-beta pruning over a material and piece-square
//! evaluation. Serves as the search core behind the medium and hard tiers.

mod eval;
mod search;

use chess_core::{Board, Color, Engine, SearchLimits, SearchResult};
use tracing::debug;

/// Fixed-depth minimax engine.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning, scored from the mover's side
/// - Material plus piece-square evaluation with a check bonus
/// - Checkmate scores that prefer the shortest mate
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, side: Color, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;

        let outcome = search::pick_best_move(board, side, limits.depth, &mut self.nodes);
        debug!(
            side = %side,
            depth = limits.depth,
            nodes = self.nodes,
            best = ?outcome.map(|(mv, _)| mv.to_string()),
            score = outcome.map(|(_, s)| s),
            "classical search finished"
        );

        SearchResult {
            best_move: outcome.map(|(mv, _)| mv),
            score: outcome.map(|(_, s)| s).unwrap_or(0),
            depth: limits.depth.max(1),
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use eval::{evaluate, piece_value, CHECK_BONUS};
pub use search::{best_move, pick_best_move, MATE_SCORE};
