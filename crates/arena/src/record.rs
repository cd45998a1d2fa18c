//! Game records and per-player statistics

use std::path::Path;
use std::time::Duration;

use chess_ai::Difficulty;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::PlayedMove;

/// Result of a single game from one side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    Pvp,
    VsComputer,
}

/// A finished game, ready to be stored.
///
/// For two-player games the result is white's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub game_type: GameType,
    pub difficulty: Option<Difficulty>,
    pub result: GameResult,
    pub points_awarded: u32,
    pub move_history: Vec<PlayedMove>,
    #[serde(rename = "duration")]
    pub duration_secs: u64,
}

impl GameRecord {
    pub fn new(
        game_type: GameType,
        difficulty: Option<Difficulty>,
        result: GameResult,
        points_awarded: u32,
        move_history: Vec<PlayedMove>,
        duration: Duration,
    ) -> Self {
        Self {
            game_type,
            difficulty,
            result,
            points_awarded,
            move_history,
            duration_secs: duration.as_secs(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Running totals for one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one game. Points are only credited for a win.
    pub fn record(&mut self, result: GameResult, points: u32) {
        match result {
            GameResult::Win => {
                self.wins += 1;
                self.points += points;
            }
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Counts a stored game record.
    pub fn record_game(&mut self, record: &GameRecord) {
        self.record(record.result, record.points_awarded);
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Win percentage, 0 when no games have been played
    pub fn win_rate(&self) -> f64 {
        let total = self.games_played();
        if total == 0 {
            return 0.0;
        }
        self.wins as f64 * 100.0 / total as f64
    }

    /// Load stats from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save stats to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
