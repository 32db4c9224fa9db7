use crate::engines::engine_trait::{Engine, EngineError, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::search::negamax::find_best_move_greedy;

/// Plays the move with the best static evaluation one ply ahead.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Sable Greedy"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError> {
        let mut scratch = game_state.clone();
        let legal_moves = scratch.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        out.best_move = find_best_move_greedy(&mut scratch, &legal_moves);
        Ok(out)
    }
}
