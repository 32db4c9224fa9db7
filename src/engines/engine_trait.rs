//! Engine abstraction layer used by the self-play driver.
//!
//! Defines the common output payload and error type so different move
//! selection strategies can be swapped at runtime behind a single trait.

use thiserror::Error;

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::threading::TaskPoll;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// `choose_move` was asked to play in a finished game.
    #[error("no legal moves in this position")]
    NoLegalMoves,

    #[error("invalid value {value:?} for option {name}")]
    InvalidOption { name: String, value: String },

    /// A background search ended without reporting.
    #[error("search worker disconnected before reporting")]
    WorkerDisconnected,

    #[error("search worker gave no usable report: {0:?}")]
    SearchInterrupted(TaskPoll),
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Unknown option names are ignored.
    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), EngineError> {
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError>;
}
