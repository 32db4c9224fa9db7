use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineError, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::negamax::{find_best_move_greedy, SearchConfig};
use crate::search::threading::{SearchTask, TaskPoll};

pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 8;

/// Fixed-depth negamax on a background `SearchTask`, with the greedy
/// selector as a fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegamaxEngine {
    config: SearchConfig,
}

impl NegamaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Sable Negamax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        if !name.eq_ignore_ascii_case("depth") {
            return Ok(());
        }
        let depth = value
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|depth| (MIN_DEPTH..=MAX_DEPTH).contains(depth))
            .ok_or_else(|| EngineError::InvalidOption {
                name: name.to_owned(),
                value: value.to_owned(),
            })?;
        self.config.depth = depth;
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, EngineError> {
        let mut scratch = game_state.clone();
        let legal_moves = scratch.legal_moves();
        if legal_moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let mut out = EngineOutput::default();
        let task = SearchTask::spawn(&scratch, self.config);
        let searched = searched_move(task.wait(&scratch), self.config.depth, &mut out)?;

        out.best_move = match searched {
            Some(mv) => Some(mv),
            None => {
                debug!("bounded search returned no move; using greedy selector");
                out.info_lines
                    .push("info string negamax_engine fallback greedy".to_owned());
                find_best_move_greedy(&mut scratch, &legal_moves)
            }
        };
        Ok(out)
    }
}

/// `Ok(None)` asks for the greedy fallback.
fn searched_move(poll: TaskPoll, depth: u8, out: &mut EngineOutput) -> Result<Option<Move>, EngineError> {
    match poll {
        TaskPoll::Ready {
            best_move,
            score,
            nodes,
        } => {
            out.info_lines
                .push(format!("info depth {depth} score cp {score} nodes {nodes}"));
            Ok(Some(best_move))
        }
        TaskPoll::NoMove => Ok(None),
        TaskPoll::Disconnected => Err(EngineError::WorkerDisconnected),
        other => Err(EngineError::SearchInterrupted(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::{searched_move, NegamaxEngine};
    use crate::engines::engine_trait::{Engine, EngineError, EngineOutput};
    use crate::game_state::game_state::GameState;
    use crate::search::threading::TaskPoll;

    #[test]
    fn depth_option_is_validated() {
        let mut engine = NegamaxEngine::default();
        assert_eq!(engine.config().depth, 4);

        engine.set_option("Depth", "2").expect("depth 2 is accepted");
        assert_eq!(engine.config().depth, 2);

        assert!(matches!(
            engine.set_option("Depth", "0"),
            Err(EngineError::InvalidOption { .. })
        ));
        assert!(engine.set_option("Depth", "deep").is_err());
        assert_eq!(engine.config().depth, 2);

        engine.set_option("Hash", "64").expect("unknown options are ignored");
    }

    #[test]
    fn engine_finds_mate_and_reports_info() {
        let game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN");
        let mut engine = NegamaxEngine::default();
        engine.set_option("Depth", "2").expect("valid depth");
        let out = engine.choose_move(&game).expect("engine should choose");
        assert_eq!(out.best_move.map(|mv| mv.describe()).as_deref(), Some("Ra8"));
        assert!(out.info_lines[0].starts_with("info depth 2"));
    }

    #[test]
    fn finished_game_is_an_error() {
        let game = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN");
        let mut engine = NegamaxEngine::default();
        assert_eq!(engine.choose_move(&game).err(), Some(EngineError::NoLegalMoves));
    }

    #[test]
    fn lost_worker_is_reported() {
        let mut out = EngineOutput::default();
        assert_eq!(
            searched_move(TaskPoll::Disconnected, 4, &mut out),
            Err(EngineError::WorkerDisconnected)
        );
        assert_eq!(
            searched_move(TaskPoll::Stale, 4, &mut out),
            Err(EngineError::SearchInterrupted(TaskPoll::Stale))
        );
        assert_eq!(searched_move(TaskPoll::NoMove, 4, &mut out), Ok(None));
        assert!(out.info_lines.is_empty());
    }
}
