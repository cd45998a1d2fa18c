//! Match runner for playing games between engines

use chess_core::{Color, Engine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::error::Result;
use crate::record::GameResult;
use crate::session::{GameMode, GameSession, SessionStatus};

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    MaxPlies,
}

/// One game of a match, result from engine1's perspective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game: u32,
    pub engine1_white: bool,
    pub result: GameResult,
    pub termination: Termination,
    pub plies: usize,
    pub moves: Vec<String>,
}

/// Everything a finished match produced, serialisable to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
    pub score: f64,
    pub games: Vec<GameSummary>,
}

impl MatchReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

struct GameOutcome {
    white_result: GameResult,
    termination: Termination,
    moves: Vec<String>,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Results are from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchReport> {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let outcome = if engine1_white {
                self.play_game(engine1, engine2)?
            } else {
                self.play_game(engine2, engine1)?
            };
            let game_result = if engine1_white {
                outcome.white_result
            } else {
                outcome.white_result.flip()
            };
            result.add(game_result);

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let score = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                info!(
                    "Game {}/{}: {} ({}) by {:?} after {} plies - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    score,
                    color,
                    outcome.termination,
                    outcome.moves.len(),
                    result.wins,
                    result.losses,
                    result.draws
                );
            }

            games.push(GameSummary {
                game: game_num + 1,
                engine1_white,
                result: game_result,
                termination: outcome.termination,
                plies: outcome.moves.len(),
                moves: outcome.moves,
            });
        }

        Ok(MatchReport {
            engine1: engine1.name().to_string(),
            engine2: engine2.name().to_string(),
            config: self.config.clone(),
            score: result.score(),
            result,
            games,
        })
    }

    /// Play a single game, result from white's perspective
    fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> Result<GameOutcome> {
        let mut session = GameSession::new(GameMode::TwoPlayer);
        white.new_game();
        black.new_game();
        let limits = self.config.search_limits();

        while !session.is_over() {
            if session.ply_count() as u32 >= self.config.max_plies {
                debug!(plies = session.ply_count(), "ply limit reached, game drawn");
                return Ok(GameOutcome {
                    white_result: GameResult::Draw,
                    termination: Termination::MaxPlies,
                    moves: move_labels(&session),
                });
            }

            let engine: &mut dyn Engine = match session.to_move() {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            session.play_engine_turn(engine, limits)?;
        }

        let termination = match session.status() {
            SessionStatus::Stalemate => Termination::Stalemate,
            _ => Termination::Checkmate,
        };
        Ok(GameOutcome {
            white_result: session.result_for(Color::White).unwrap_or(GameResult::Draw),
            termination,
            moves: move_labels(&session),
        })
    }
}

fn move_labels(session: &GameSession) -> Vec<String> {
    session
        .history()
        .iter()
        .map(|played| played.as_move().to_string())
        .collect()
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
