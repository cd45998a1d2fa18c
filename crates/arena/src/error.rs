use chess_core::{ChessError, Color, Move};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("game is already over")]
    GameOver,

    #[error("it is not {0}'s turn to move by hand")]
    NotYourTurn(Color),

    #[error("illegal move {0}")]
    IllegalMove(Move),

    #[error("engine '{engine}' returned no move for {side} while legal moves exist")]
    EngineNoMove { engine: String, side: Color },

    #[error("invalid board: {0}")]
    InvalidBoard(#[from] ChessError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
