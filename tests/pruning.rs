//! Alpha-beta must pick the same move and score as a full-width negamax.

use sable_chess::game_state::game_state::GameState;
use sable_chess::moves::chess_move::Move;
use sable_chess::search::board_scoring::{BoardScorer, PieceSquareScorer, STALEMATE};
use sable_chess::search::negamax::{search_bounded, SearchConfig, INFINITY};

fn full_width(game: &mut GameState, moves: &[Move], depth: u8, turn: i32) -> (i32, Option<Move>) {
    if depth == 0 || moves.is_empty() {
        return (turn * PieceSquareScorer.score(game), None);
    }

    let mut max_score = -INFINITY;
    let mut best = None;
    for &mv in moves {
        game.make_move(mv);
        let replies = game.legal_moves();
        let score = -full_width(game, &replies, depth - 1, -turn).0;
        game.undo_move().expect("undo in reference search");
        if score > max_score {
            max_score = score;
            best = Some(mv);
        }
    }
    if game.is_stalemate() {
        max_score = STALEMATE;
    }
    (max_score, best)
}

fn assert_equivalent(fen: &str, depth: u8) {
    let mut game = GameState::from_fen(fen).expect("FEN");
    let moves = game.legal_moves();
    let turn = game.side_to_move().turn_multiplier();

    let (reference_score, reference_move) = full_width(&mut game, &moves, depth, turn);
    let pruned = search_bounded(&mut game, &moves, &SearchConfig { depth }, &PieceSquareScorer, None);

    assert_eq!(pruned.best_score, reference_score, "score differs for {fen}");
    assert_eq!(pruned.best_move, reference_move, "move differs for {fen}");
}

#[test]
fn opening_positions() {
    assert_equivalent("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 3);
    assert_equivalent("rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2", 3);
}

#[test]
fn tactical_positions() {
    assert_equivalent("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 2);
    assert_equivalent("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 3);
    assert_equivalent("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1", 3);
}

#[test]
fn endgame_positions() {
    assert_equivalent("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 4);
    assert_equivalent("7k/8/6K1/8/8/8/8/R7 b - - 0 1", 3);
}
