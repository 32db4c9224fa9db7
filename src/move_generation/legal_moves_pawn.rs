//! Legal pawn move generation.
//!
//! Emits single and double advances, diagonal captures, promotions (always to
//! a queen, applied by `make_move`) and en-passant captures for one pawn.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_square_attacked, PinsAndChecks};
use crate::move_generation::legal_move_shared::{allowed_by_pin, is_enemy};
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    pins: &PinsAndChecks,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move();
    let forward = side.pawn_direction();
    let pin = pins.pin_on(from);

    if allowed_by_pin(pin, (forward, 0)) {
        if let Some(one) = from.offset((forward, 0), 1) {
            if game_state.piece_at(one).is_none() {
                out.push(Move::new(from, one, game_state.board()));

                if from.row() == side.pawn_start_row() {
                    if let Some(two) = from.offset((forward, 0), 2) {
                        if game_state.piece_at(two).is_none() {
                            out.push(Move::new(from, two, game_state.board()));
                        }
                    }
                }
            }
        }
    }

    for side_step in [-1, 1] {
        let direction = (forward, side_step);
        if !allowed_by_pin(pin, direction) {
            continue;
        }
        let Some(to) = from.offset(direction, 1) else {
            continue;
        };

        if is_enemy(game_state, to, side) {
            out.push(Move::new(from, to, game_state.board()));
        } else if game_state.en_passant_target() == Some(to)
            && en_passant_keeps_king_safe(game_state, from, to)
        {
            out.push(Move::en_passant(from, to, game_state.board()));
        }
    }
}

/// En passant empties two squares on the capturing pawn's rank at once, which
/// can open a rank (or any other line) onto the king even though neither pawn
/// was individually pinned. Replay the capture on a scratch board and probe
/// the king.
fn en_passant_keeps_king_safe(game_state: &GameState, from: Square, to: Square) -> bool {
    let side = game_state.side_to_move();
    let mut board = *game_state.board();
    let victim = Square::new(from.row(), to.col());

    board[from.row() as usize][from.col() as usize] = None;
    board[victim.row() as usize][victim.col() as usize] = None;
    board[to.row() as usize][to.col() as usize] = Some(Piece::new(side, PieceKind::Pawn));

    !is_square_attacked(&board, game_state.king_location(side), side)
}
