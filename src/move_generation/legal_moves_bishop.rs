//! Legal bishop move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinsAndChecks;
use crate::move_generation::legal_move_shared::{push_slider_moves, BISHOP_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    pins: &PinsAndChecks,
    out: &mut Vec<Move>,
) {
    push_slider_moves(game_state, from, &BISHOP_DIRECTIONS, pins.pin_on(from), out);
}
