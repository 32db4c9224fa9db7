//! Legal knight move generation.
//!
//! A pinned knight can never stay on its pin line, so it has no moves.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::PinsAndChecks;
use crate::move_generation::legal_move_shared::{is_empty_or_enemy, KNIGHT_OFFSETS};
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    pins: &PinsAndChecks,
    out: &mut Vec<Move>,
) {
    if pins.pin_on(from).is_some() {
        return;
    }

    let side = game_state.side_to_move();
    for jump in KNIGHT_OFFSETS {
        let Some(to) = from.offset(jump, 1) else {
            continue;
        };
        if is_empty_or_enemy(game_state, to, side) {
            out.push(Move::new(from, to, game_state.board()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_checks::scan_pins_and_checks;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn pinned_knight_is_frozen() {
        let game = GameState::from_fen("4k3/8/8/8/1b6/8/3N4/4K3 w - - 0 1").expect("FEN");
        let pins = scan_pins_and_checks(game.board(), game.king_location(game.side_to_move()), game.side_to_move());
        let mut out = Vec::new();
        generate_knight_moves(&game, algebraic_to_square("d2").expect("d2"), &pins, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn corner_knight_has_two_jumps() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").expect("FEN");
        let pins = scan_pins_and_checks(game.board(), game.king_location(game.side_to_move()), game.side_to_move());
        let mut out = Vec::new();
        generate_knight_moves(&game, algebraic_to_square("a1").expect("a1"), &pins, &mut out);
        assert_eq!(out.len(), 2);
    }
}
