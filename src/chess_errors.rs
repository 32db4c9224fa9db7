//! Errors used throughout the chess engine.
//!
//! Running out of legal moves is not an error: checkmate and stalemate are
//! reported through the game state flags. The variants here cover the
//! recoverable failure modes of the engine API, such as undoing with an empty
//! history or feeding a malformed FEN string to the setup helpers.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Unified error type for game-state operations and setup parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// `undo_move` was called with no applied moves. The state is unchanged.
    #[error("unable to undo: move history is empty")]
    NothingToUndo,

    /// A FEN string failed to parse.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A textual square (for example `"e9"`) failed to parse.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// A position was assembled without a king for one side.
    #[error("position has no {0:?} king")]
    MissingKing(Color),
}

/// Convenience result alias for fallible engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
