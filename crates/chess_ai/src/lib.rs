//! Difficulty tiers for the computer opponent.
//!
//! - Easy plays a uniformly random legal move.
//! - Medium searches 2 or 3 plies, chosen at random per move.
//! - Hard searches 4 plies, or 5 plies with probability 0.3.

use std::fmt;
use std::str::FromStr;

use chess_core::{Board, Color, Engine, Move, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;


/// Chance that a hard-tier move gets the deeper search.
pub const HARD_DEEP_PROBABILITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Points a player earns for beating the computer at this level.
    pub fn points_for_win(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    /// Draws the search depth for one move, `None` meaning no search at all.
    pub fn search_depth<R: Rng + ?Sized>(self, rng: &mut R) -> Option<u8> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(rng.gen_range(2..=3)),
            Difficulty::Hard => Some(if rng.gen_bool(HARD_DEEP_PROBABILITY) { 5 } else { 4 }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}', expected easy, medium or hard")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Picks a move for `color` at the given difficulty using the thread RNG.
pub fn best_move(board: &Board, color: Color, difficulty: Difficulty) -> Option<Move> {
    best_move_with_rng(board, color, difficulty, &mut rand::thread_rng())
}

/// Picks a move for `color` at the given difficulty.
///
/// Returns `None` only when `color` has no legal move.
pub fn best_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    match difficulty.search_depth(rng) {
        None => random_engine::random_move(board, color, rng),
        Some(depth) => {
            let mut nodes = 0;
            let found = classical_engine::pick_best_move(board, color, depth, &mut nodes);
            debug!(%difficulty, depth, nodes, "tiered search finished");
            found.map(|(mv, _)| mv)
        }
    }
}

/// Engine adapter that plays at a fixed difficulty.
///
/// Depth comes from the tier, so the depth in [`SearchLimits`] is ignored.
#[derive(Debug, Clone)]
pub struct TieredEngine<R = StdRng> {
    difficulty: Difficulty,
    rng: R,
}

impl TieredEngine<StdRng> {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_entropy())
    }

    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TieredEngine<R> {
    pub fn with_rng(difficulty: Difficulty, rng: R) -> Self {
        Self { difficulty, rng }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl<R: Rng + Send> Engine for TieredEngine<R> {
    fn search(&mut self, board: &Board, side: Color, _limits: SearchLimits) -> SearchResult {
        match self.difficulty.search_depth(&mut self.rng) {
            None => SearchResult {
                best_move: random_engine::random_move(board, side, &mut self.rng),
                score: 0,
                depth: 1,
                nodes: 1,
            },
            Some(depth) => {
                let mut nodes = 0;
                let found = classical_engine::pick_best_move(board, side, depth, &mut nodes);
                debug!(difficulty = %self.difficulty, depth, nodes, "tiered search finished");
                SearchResult {
                    best_move: found.map(|(mv, _)| mv),
                    score: found.map(|(_, s)| s).unwrap_or(0),
                    depth,
                    nodes,
                }
            }
        }
    }

    fn name(&self) -> &str {
        match self.difficulty {
            Difficulty::Easy => "Tiered AI (easy)",
            Difficulty::Medium => "Tiered AI (medium)",
            Difficulty::Hard => "Tiered AI (hard)",
        }
    }
}
