//! One game in progress: turn order, history and terminal detection
//!
//! The rules engine has no notion of whose turn it is. A session owns that
//! bookkeeping and refuses moves that are out of turn or illegal.

use std::time::Duration;

use chess_ai::Difficulty;
use chess_core::{
    game_status, is_check, is_valid_move, legal_moves, Board, Color, Engine, GameStatus, Move,
    Piece, SearchLimits, Square,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ArenaError, Result};
use crate::record::{GameRecord, GameResult, GameType};

/// Side the human plays against the computer.
pub const HUMAN_COLOR: Color = Color::White;
/// Side the computer plays.
pub const COMPUTER_COLOR: Color = Color::Black;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "mode")]
pub enum GameMode {
    TwoPlayer,
    VsComputer { difficulty: Difficulty },
}

impl GameMode {
    pub fn game_type(self) -> GameType {
        match self {
            GameMode::TwoPlayer => GameType::Pvp,
            GameMode::VsComputer { .. } => GameType::VsComputer,
        }
    }

    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VsComputer { difficulty } => Some(difficulty),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Playing,
    Checkmate { winner: Color },
    Stalemate,
}

impl SessionStatus {
    pub fn is_over(self) -> bool {
        self != SessionStatus::Playing
    }
}

/// A committed move together with the piece that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

impl PlayedMove {
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckFlags {
    pub white: bool,
    pub black: bool,
}

impl CheckFlags {
    pub fn get(self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    board: Board,
    to_move: Color,
    history: Vec<PlayedMove>,
    status: SessionStatus,
}

impl GameSession {
    /// Fresh game from the initial position, white to move.
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            board: Board::initial(),
            to_move: Color::White,
            history: Vec::new(),
            status: SessionStatus::Playing,
        }
    }

    /// Game starting from an arbitrary position.
    ///
    /// The board must hold exactly one king per side.
    pub fn from_board(board: Board, to_move: Color, mode: GameMode) -> Result<Self> {
        board.validate()?;
        let mut session = Self {
            mode,
            board,
            to_move,
            history: Vec::new(),
            status: SessionStatus::Playing,
        };
        session.refresh_status();
        Ok(session)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.history.last()
    }

    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// True when the side to move is played by the computer.
    pub fn is_computer_turn(&self) -> bool {
        matches!(self.mode, GameMode::VsComputer { .. }) && self.to_move == COMPUTER_COLOR
    }

    /// Squares the piece on `from` may move to right now.
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board, from, self.to_move)
    }

    pub fn check_flags(&self) -> CheckFlags {
        CheckFlags {
            white: is_check(&self.board, Color::White),
            black: is_check(&self.board, Color::Black),
        }
    }

    /// Plays a move by hand for the side to move.
    pub fn play(&mut self, from: Square, to: Square) -> Result<PlayedMove> {
        if self.is_over() {
            warn!(from = %from, to = %to, "move rejected, game is over");
            return Err(ArenaError::GameOver);
        }
        if self.is_computer_turn() {
            warn!(from = %from, to = %to, "move rejected, computer to move");
            return Err(ArenaError::NotYourTurn(self.to_move));
        }
        self.commit(from, to)
    }

    /// Lets `engine` pick and play the move for the side to move.
    ///
    /// In vs-computer mode this is only allowed on the computer's turn.
    pub fn play_engine_turn(
        &mut self,
        engine: &mut dyn Engine,
        limits: SearchLimits,
    ) -> Result<PlayedMove> {
        if self.is_over() {
            return Err(ArenaError::GameOver);
        }
        if matches!(self.mode, GameMode::VsComputer { .. }) && !self.is_computer_turn() {
            return Err(ArenaError::NotYourTurn(self.to_move));
        }

        let side = self.to_move;
        let result = engine.search(&self.board, side, limits);
        let mv = result.best_move.ok_or_else(|| ArenaError::EngineNoMove {
            engine: engine.name().to_string(),
            side,
        })?;
        debug!(
            engine = engine.name(),
            side = %side,
            mv = %mv,
            score = result.score,
            nodes = result.nodes,
            "engine move"
        );
        self.commit(mv.from, mv.to)
    }

    fn commit(&mut self, from: Square, to: Square) -> Result<PlayedMove> {
        let mover = self.to_move;
        let illegal = ArenaError::IllegalMove(Move::new(from, to));
        if !is_valid_move(&self.board, from, to, mover) {
            warn!(side = %mover, from = %from, to = %to, "illegal move rejected");
            return Err(illegal);
        }
        let piece = self.board.piece_at(from).ok_or(illegal)?;

        self.board = self.board.apply_move(Move::new(from, to));
        let played = PlayedMove { from, to, piece };
        self.history.push(played);
        self.to_move = mover.other();
        self.refresh_status();
        Ok(played)
    }

    fn refresh_status(&mut self) {
        self.status = match game_status(&self.board, self.to_move) {
            GameStatus::Checkmate => SessionStatus::Checkmate {
                winner: self.to_move.other(),
            },
            GameStatus::Stalemate => SessionStatus::Stalemate,
            GameStatus::InProgress | GameStatus::Check => SessionStatus::Playing,
        };
        if self.is_over() {
            debug!(status = ?self.status, plies = self.history.len(), "game finished");
        }
    }

    /// Outcome for `color`, `None` while the game is running.
    pub fn result_for(&self, color: Color) -> Option<GameResult> {
        match self.status {
            SessionStatus::Playing => None,
            SessionStatus::Stalemate => Some(GameResult::Draw),
            SessionStatus::Checkmate { winner } if winner == color => Some(GameResult::Win),
            SessionStatus::Checkmate { .. } => Some(GameResult::Loss),
        }
    }

    /// Outcome for the human in a vs-computer game.
    pub fn result(&self) -> Option<GameResult> {
        match self.mode {
            GameMode::TwoPlayer => None,
            GameMode::VsComputer { .. } => self.result_for(HUMAN_COLOR),
        }
    }

    /// Points earned by the human, non-zero only for a win over the computer.
    pub fn points_awarded(&self) -> u32 {
        match (self.mode, self.result()) {
            (GameMode::VsComputer { difficulty }, Some(GameResult::Win)) => {
                difficulty.points_for_win()
            }
            _ => 0,
        }
    }

    /// Back to the initial position, same mode.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    /// Record of the finished game, `None` while it is still running.
    pub fn to_record(&self, duration: Duration) -> Option<GameRecord> {
        let result = match self.mode {
            GameMode::TwoPlayer => self.result_for(Color::White),
            GameMode::VsComputer { .. } => self.result(),
        }?;
        Some(GameRecord::new(
            self.mode.game_type(),
            self.mode.difficulty(),
            result,
            self.points_awarded(),
            self.history.clone(),
            duration,
        ))
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
