//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - The easy difficulty tier
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use chess_core::{all_legal_moves, Board, Color, Engine, Move, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::trace;

#[cfg(test)]
mod lib_tests;

/// Picks one of `color`'s legal moves uniformly at random.
///
/// Returns `None` when `color` has no legal move.
pub fn random_move<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    let moves = all_legal_moves(board, color);
    let choice = moves.choose(rng).copied();
    trace!(side = %color, candidates = moves.len(), "random move drawn");
    choice
}

/// A chess engine that plays random legal moves.
///
/// The random source is a type parameter so callers can plug in a seeded
/// generator and get reproducible games.
#[derive(Debug, Clone)]
pub struct RandomEngine<R = StdRng> {
    rng: R,
    nodes: u64,
}

impl RandomEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, nodes: 0 }
    }
}

impl<R: Rng + Send> Engine for RandomEngine<R> {
    fn search(&mut self, board: &Board, side: Color, _limits: SearchLimits) -> SearchResult {
        self.nodes = 1;

        SearchResult {
            best_move: random_move(board, side, &mut self.rng),
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
