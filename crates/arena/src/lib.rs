//! Game arena on top of the chess rules engine
//!
//! This crate provides infrastructure for:
//! - Running a single game with turn tracking and terminal detection
//! - Recording finished games and accumulating player statistics
//! - Running matches between engines and writing JSON reports
//!
//! # Usage
//!
//! ```bash
//! # Classical engine against the hard tier, 20 games
//! cargo run -p arena -- match classical hard --games 20
//!
//! # Ask the medium tier for a move in a given position
//! cargo run -p arena -- bestmove --placement 6k1/5ppp/8/8/8/8/8/R5K1 --difficulty medium
//! ```

mod config;
mod error;
mod match_runner;
mod record;
mod session;

pub use config::*;
pub use error::{ArenaError, Result};
pub use match_runner::*;
pub use record::*;
pub use session::*;
