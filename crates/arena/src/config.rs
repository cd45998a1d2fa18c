//! Match configuration, loadable from TOML

use std::path::Path;

use chess_core::SearchLimits;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth handed to depth-driven engines
    pub depth: u8,
    /// Plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Seed for engines that draw random numbers
    pub seed: Option<u64>,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            max_plies: 200,
            alternate_colors: true,
            seed: None,
            verbose: true,
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Search limits for one engine move
    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits::depth(self.depth)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
