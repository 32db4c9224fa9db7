//! Legal rook move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinsAndChecks;
use crate::move_generation::legal_move_shared::{push_slider_moves, ROOK_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    pins: &PinsAndChecks,
    out: &mut Vec<Move>,
) {
    push_slider_moves(game_state, from, &ROOK_DIRECTIONS, pins.pin_on(from), out);
}
