//! Legal queen move generation.
//!
//! A queen slides like a rook and a bishop combined; a pinned queen keeps
//! whichever of those rays run along its pin line.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinsAndChecks;
use crate::move_generation::legal_move_shared::{push_slider_moves, KING_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    pins: &PinsAndChecks,
    out: &mut Vec<Move>,
) {
    push_slider_moves(game_state, from, &KING_DIRECTIONS, pins.pin_on(from), out);
}
