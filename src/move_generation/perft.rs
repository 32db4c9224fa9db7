use std::panic;
use std::thread;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Counts leaf nodes `depth` plies below `game_state`, with per-kind tallies
/// of the moves that reach them. The position is restored before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.legal_moves() {
        perft_recurse(game_state, mv, depth, 1, &mut total);
    }
    total
}

/// Same counts as `perft`, splitting the root moves across threads. Each
/// worker owns a clone of the position.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut root = game_state.clone();
    let root_moves = root.legal_moves();
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let mut local_state = root.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(&mut local_state, mv, depth, 1, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok(local) => total.merge(local),
            Err(payload) => panic::resume_unwind(payload),
        }
    }
    total
}

fn perft_recurse(
    game_state: &mut GameState,
    mv: Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    game_state.make_move(mv);

    if current_depth == search_depth {
        counts.nodes += 1;
        if mv.is_capture() {
            counts.captures += 1;
        }
        if mv.is_en_passant() {
            counts.en_passant += 1;
        }
        if mv.is_castle() {
            counts.castles += 1;
        }
        if mv.is_pawn_promotion() {
            counts.promotions += 1;
        }
        if is_king_in_check(game_state, game_state.side_to_move()) {
            counts.checks += 1;
            if game_state.legal_moves().is_empty() {
                counts.checkmates += 1;
            }
        }
    } else {
        for child in game_state.legal_moves() {
            perft_recurse(game_state, child, search_depth, current_depth + 1, counts);
        }
    }

    let undone = game_state.undo_move();
    debug_assert!(undone.is_ok(), "perft undo must pair with its make");
}
