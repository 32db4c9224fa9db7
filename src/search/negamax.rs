//! Fixed-depth negamax search with alpha-beta pruning, plus the 1-ply greedy
//! selector used when the bounded search yields nothing.
//!
//! The search walks one `GameState` with strict make/undo nesting. Child
//! move lists come from `legal_moves`, which also sets the child's terminal
//! flags before it is scored.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer, CHECKMATE, STALEMATE};

/// Outer bound of the search window. Strictly above `CHECKMATE` so that a root
/// where every move loses to mate still records a best move.
pub const INFINITY: i32 = CHECKMATE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4 }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
}

struct SearchContext<'a, S: BoardScorer> {
    scorer: &'a S,
    stop: Option<&'a AtomicBool>,
    nodes: u64,
}

impl<S: BoardScorer> SearchContext<'_, S> {
    #[inline]
    fn stopped(&self) -> bool {
        self.stop.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Runs the bounded search over `legal_moves`, the move list of `game_state`
/// produced by its latest `legal_moves` call. `best_score` is from the side
/// to move's point of view.
///
/// When `stop` is raised the search unwinds early; the result is then partial
/// and callers should discard it.
pub fn search_bounded<S: BoardScorer>(
    game_state: &mut GameState,
    legal_moves: &[Move],
    config: &SearchConfig,
    scorer: &S,
    stop: Option<&AtomicBool>,
) -> SearchResult {
    let mut context = SearchContext {
        scorer,
        stop,
        nodes: 0,
    };
    let turn = game_state.side_to_move().turn_multiplier();
    let (best_score, best_move) = negamax(
        &mut context,
        game_state,
        legal_moves,
        config.depth,
        -INFINITY,
        INFINITY,
        turn,
    );

    debug!(
        depth = config.depth,
        score = best_score,
        nodes = context.nodes,
        best_move = ?best_move.map(|mv| mv.describe()),
        "bounded search finished"
    );

    SearchResult {
        best_move,
        best_score,
        depth: config.depth,
        nodes: context.nodes,
    }
}

/// Returns the node score and, for nodes that searched at least one move, the
/// move that produced it. Only the root's move is used.
fn negamax<S: BoardScorer>(
    context: &mut SearchContext<'_, S>,
    game_state: &mut GameState,
    moves: &[Move],
    depth: u8,
    mut alpha: i32,
    beta: i32,
    turn: i32,
) -> (i32, Option<Move>) {
    context.nodes += 1;

    if depth == 0 || moves.is_empty() {
        return (turn * context.scorer.score(game_state), None);
    }

    let mut max_score = -INFINITY;
    let mut best_move = None;

    for &mv in moves {
        if context.stopped() {
            break;
        }

        game_state.make_move(mv);
        let replies = game_state.legal_moves();
        let (child_score, _) = negamax(
            context,
            game_state,
            &replies,
            depth - 1,
            -beta,
            -alpha,
            -turn,
        );
        let score = -child_score;
        let undone = game_state.undo_move();
        debug_assert!(undone.is_ok(), "undo must pair with the make above");

        if score > max_score {
            max_score = score;
            best_move = Some(mv);
        }
        if max_score > alpha {
            alpha = max_score;
        }
        if alpha >= beta {
            break;
        }
    }

    // Draws by insufficient material still have moves to search.
    if game_state.is_stalemate() {
        max_score = STALEMATE;
    }

    (max_score, best_move)
}

/// Best move for the side to move at `depth` plies using the default scorer.
/// `None` only when `legal_moves` is empty.
pub fn find_best_move_bounded(
    game_state: &mut GameState,
    legal_moves: &[Move],
    depth: u8,
) -> Option<Move> {
    search_bounded(
        game_state,
        legal_moves,
        &SearchConfig { depth },
        &PieceSquareScorer,
        None,
    )
    .best_move
}

/// Picks the move with the best static evaluation one ply ahead. A move that
/// mates is returned immediately.
pub fn find_best_move_greedy(game_state: &mut GameState, legal_moves: &[Move]) -> Option<Move> {
    find_best_move_greedy_with(game_state, legal_moves, &PieceSquareScorer)
}

pub fn find_best_move_greedy_with<S: BoardScorer>(
    game_state: &mut GameState,
    legal_moves: &[Move],
    scorer: &S,
) -> Option<Move> {
    let turn = game_state.side_to_move().turn_multiplier();
    let mut max_score = -INFINITY;
    let mut best_move = None;

    for &mv in legal_moves {
        game_state.make_move(mv);
        game_state.legal_moves();

        if game_state.is_checkmate() {
            let undone = game_state.undo_move();
            debug_assert!(undone.is_ok(), "undo must pair with the make above");
            debug!(best_move = %mv, "greedy selector found mate");
            return Some(mv);
        }
        let score = if game_state.is_stalemate() {
            STALEMATE
        } else {
            turn * scorer.score(game_state)
        };
        let undone = game_state.undo_move();
        debug_assert!(undone.is_ok(), "undo must pair with the make above");

        if score > max_score {
            max_score = score;
            best_move = Some(mv);
        }
    }

    debug!(score = max_score, best_move = ?best_move.map(|mv| mv.describe()), "greedy selection");
    best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn position(fen: &str) -> (GameState, Vec<Move>) {
        let mut game = GameState::from_fen(fen).expect("test FEN should parse");
        let moves = game.legal_moves();
        (game, moves)
    }

    #[test]
    fn finds_back_rank_mate_in_one() {
        let (mut game, moves) = position("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let best = find_best_move_bounded(&mut game, &moves, 2).expect("a move exists");
        assert_eq!(best.describe(), "Ra8");
        assert_eq!(best.end(), algebraic_to_square("a8").expect("square"));
    }

    #[test]
    fn search_leaves_the_position_unchanged() {
        let (mut game, moves) = position(crate::game_state::chess_rules::STARTING_POSITION_FEN);
        let before = game.snapshot();
        let result = search_bounded(&mut game, &moves, &SearchConfig { depth: 3 }, &PieceSquareScorer, None);
        assert!(result.best_move.is_some());
        assert!(result.nodes > moves.len() as u64);
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn greedy_selection_restores_the_history() {
        let (mut game, moves) = position(crate::game_state::chess_rules::STARTING_POSITION_FEN);
        let opening = moves[0];
        game.make_move(opening);
        let replies = game.legal_moves();
        let before = game.snapshot();

        find_best_move_greedy(&mut game, &replies).expect("a move exists");
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.last_move(), Some(opening));
        assert!(game.undo_move().is_ok());
        assert!(game.undo_move().is_err());
    }

    #[test]
    fn takes_a_hanging_queen() {
        let (mut game, moves) = position("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
        let best = find_best_move_bounded(&mut game, &moves, 2).expect("a move exists");
        assert_eq!(best.describe(), "Rxd5");
    }

    #[test]
    fn lost_position_still_returns_a_move() {
        // Black is mated next move whatever it plays.
        let (mut game, moves) = position("7k/8/6K1/8/8/8/8/R7 b - - 0 1");
        assert!(!moves.is_empty());
        let result = search_bounded(&mut game, &moves, &SearchConfig { depth: 2 }, &PieceSquareScorer, None);
        assert_eq!(result.best_score, -CHECKMATE);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn empty_move_list_yields_nothing() {
        let (mut game, moves) = position("k7/8/1Q6/8/8/8/8/4K3 b - - 0 1");
        assert!(moves.is_empty());
        assert!(find_best_move_bounded(&mut game, &moves, 4).is_none());
        assert!(find_best_move_greedy(&mut game, &moves).is_none());
    }

    #[test]
    fn raised_stop_flag_cuts_the_search_short() {
        let (mut game, moves) = position(crate::game_state::chess_rules::STARTING_POSITION_FEN);
        let stop = AtomicBool::new(true);
        let result = search_bounded(&mut game, &moves, &SearchConfig { depth: 4 }, &PieceSquareScorer, Some(&stop));
        assert!(result.best_move.is_none());
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn greedy_prefers_mate_then_material() {
        let (mut game, moves) = position("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let best = find_best_move_greedy(&mut game, &moves).expect("a move exists");
        assert_eq!(best.describe(), "Ra8");

        let (mut game, moves) = position("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
        let best = find_best_move_greedy(&mut game, &moves).expect("a move exists");
        assert_eq!(best.describe(), "Rxd5");
    }

    #[test]
    fn greedy_avoids_stalemating_when_ahead() {
        // Qb6 would stalemate the a8 king; any other sensible move keeps winning.
        let (mut game, moves) = position("k7/8/8/1Q6/8/8/8/4K3 w - - 0 1");
        let best = find_best_move_greedy(&mut game, &moves).expect("a move exists");
        assert_ne!(best.describe(), "Qb6");
    }
}
