//! Direction tables and helpers shared by the per-piece generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

pub const ROOK_DIRECTIONS: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const BISHOP_DIRECTIONS: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal rays first, then diagonals. The detector relies on this split.
pub const KING_DIRECTIONS: [Offset; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-1, -2),
    (2, -1),
    (1, -2),
    (-2, 1),
    (-1, 2),
    (2, 1),
    (1, 2),
];

#[inline]
pub fn is_orthogonal(direction: Offset) -> bool {
    direction.0 == 0 || direction.1 == 0
}

/// A piece pinned along `pin` may only travel along that line, either way.
#[inline]
pub fn allowed_by_pin(pin: Option<Offset>, direction: Offset) -> bool {
    match pin {
        None => true,
        Some((dr, dc)) => direction == (dr, dc) || direction == (-dr, -dc),
    }
}

#[inline]
pub fn is_enemy(game_state: &GameState, square: Square, side: Color) -> bool {
    matches!(game_state.piece_at(square), Some(piece) if piece.color != side)
}

/// Target is empty or holds an enemy piece.
#[inline]
pub fn is_empty_or_enemy(game_state: &GameState, square: Square, side: Color) -> bool {
    match game_state.piece_at(square) {
        None => true,
        Some(piece) => piece.color != side,
    }
}

/// Walks each ray from `from`, stopping before a friendly piece or after
/// capturing an enemy one. Rays that leave the pin line are skipped.
pub fn push_slider_moves(
    game_state: &GameState,
    from: Square,
    directions: &[Offset],
    pin: Option<Offset>,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move();
    for &direction in directions {
        if !allowed_by_pin(pin, direction) {
            continue;
        }
        for step in 1..8 {
            let Some(to) = from.offset(direction, step) else {
                break;
            };
            match game_state.piece_at(to) {
                None => out.push(Move::new(from, to, game_state.board())),
                Some(piece) if piece.color != side => {
                    out.push(Move::new(from, to, game_state.board()));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
