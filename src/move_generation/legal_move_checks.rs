//! Pin and check detection by ray scanning outward from a king square.
//!
//! The scan answers three questions at once for the side whose king stands
//! (or would stand) on the probe square: is it attacked, which friendly pieces
//! are absolutely pinned and along which line, and which enemy pieces give
//! check from where.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{is_orthogonal, KING_DIRECTIONS, KNIGHT_OFFSETS};

/// A friendly piece that may only move along `±direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    /// Step from the king toward the pinned piece.
    pub direction: Offset,
}

/// An enemy piece attacking the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRecord {
    pub checker: Square,
    /// Ray step from the king toward the checker, or the knight jump.
    pub direction: Offset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinsAndChecks {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<CheckRecord>,
}

impl PinsAndChecks {
    /// Pin line for the piece on `square`, if it is pinned.
    #[inline]
    pub fn pin_on(&self, square: Square) -> Option<Offset> {
        self.pins
            .iter()
            .find(|pin| pin.square == square)
            .map(|pin| pin.direction)
    }

    #[inline]
    pub fn is_double_check(&self) -> bool {
        self.checks.len() > 1
    }
}

/// Scans from `king_square` on behalf of `side`.
///
/// `side`'s own king is transparent to the scan, so the same routine can
/// validate a king step (probe the destination while the king still stands on
/// its origin) and castling transit squares.
pub fn scan_pins_and_checks(board: &Board, king_square: Square, side: Color) -> PinsAndChecks {
    let mut result = PinsAndChecks::default();
    let enemy = side.opposite();

    for direction in KING_DIRECTIONS {
        let mut candidate_pin: Option<Square> = None;

        for step in 1..8 {
            let Some(square) = king_square.offset(direction, step) else {
                break;
            };
            let Some(piece) = board[square.row() as usize][square.col() as usize] else {
                continue;
            };

            if piece.color == side {
                if piece.kind == PieceKind::King {
                    continue;
                }
                if candidate_pin.is_some() {
                    // Two friendly pieces shield the king on this ray.
                    break;
                }
                candidate_pin = Some(square);
                continue;
            }

            if threatens_along_ray(piece.kind, enemy, direction, step) {
                match candidate_pin {
                    None => {
                        result.in_check = true;
                        result.checks.push(CheckRecord {
                            checker: square,
                            direction,
                        });
                    }
                    Some(pinned) => result.pins.push(Pin {
                        square: pinned,
                        direction,
                    }),
                }
            }
            break;
        }
    }

    for jump in KNIGHT_OFFSETS {
        let Some(square) = king_square.offset(jump, 1) else {
            continue;
        };
        if board[square.row() as usize][square.col() as usize]
            == Some(Piece::new(enemy, PieceKind::Knight))
        {
            result.in_check = true;
            result.checks.push(CheckRecord {
                checker: square,
                direction: jump,
            });
        }
    }

    result
}

/// Whether an enemy piece first met `distance` steps along `direction` from
/// the king attacks back down the same ray.
fn threatens_along_ray(kind: PieceKind, enemy: Color, direction: Offset, distance: i8) -> bool {
    let orthogonal = is_orthogonal(direction);
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => orthogonal,
        PieceKind::Bishop => !orthogonal,
        PieceKind::King => distance == 1,
        // Enemy pawns capture toward the king: they sit one row "behind"
        // their own advance direction.
        PieceKind::Pawn => {
            distance == 1 && !orthogonal && direction.0 == -enemy.pawn_direction()
        }
        PieceKind::Knight => false,
    }
}

/// Whether a `side` piece standing on `square` would be attacked.
#[inline]
pub fn is_square_attacked(board: &Board, square: Square, side: Color) -> bool {
    scan_pins_and_checks(board, square, side).in_check
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state.board(), game_state.king_location(color), color)
}

/// Squares a non-king move may land on to answer a single check: the checker
/// itself plus, for sliders, every square between it and the king.
pub fn check_block_squares(king_square: Square, check: &CheckRecord, checker: PieceKind) -> Vec<Square> {
    if checker == PieceKind::Knight {
        return vec![check.checker];
    }

    let mut squares = Vec::with_capacity(7);
    for step in 1..8 {
        let Some(square) = king_square.offset(check.direction, step) else {
            break;
        };
        squares.push(square);
        if square == check.checker {
            break;
        }
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    fn scan(fen: &str) -> PinsAndChecks {
        let game = GameState::from_fen(fen).expect("test FEN should parse");
        let side = game.side_to_move();
        scan_pins_and_checks(game.board(), game.king_location(side), side)
    }

    #[test]
    fn start_position_has_no_pins_or_checks() {
        let result = scan(crate::game_state::chess_rules::STARTING_POSITION_FEN);
        assert_eq!(result, PinsAndChecks::default());
    }

    #[test]
    fn bishop_pin_is_recorded_along_the_diagonal() {
        // Knight on d2 shields the e1 king from the b4 bishop.
        let result = scan("4k3/8/8/8/1b6/8/3N4/4K3 w - - 0 1");
        assert!(!result.in_check);
        assert_eq!(result.pins, vec![Pin { square: sq("d2"), direction: (-1, -1) }]);
        assert_eq!(result.pin_on(sq("d2")), Some((-1, -1)));
    }

    #[test]
    fn two_friendly_blockers_mean_no_pin() {
        let result = scan("4k3/8/8/4r3/8/4N3/4B3/4K3 w - - 0 1");
        assert!(result.pins.is_empty());
        assert!(!result.in_check);
    }

    #[test]
    fn rook_on_diagonal_does_not_pin() {
        let result = scan("4k3/8/8/8/1r6/8/3N4/4K3 w - - 0 1");
        assert!(result.pins.is_empty());
    }

    #[test]
    fn double_check_from_rook_and_knight() {
        let result = scan("4k3/8/8/8/8/3n4/8/r3K3 w - - 0 1");
        assert!(result.in_check);
        assert!(result.is_double_check());
        assert!(result.checks.iter().any(|c| c.checker == sq("a1") && c.direction == (0, -1)));
        assert!(result.checks.iter().any(|c| c.checker == sq("d3")));
    }

    #[test]
    fn pawns_only_check_on_their_capture_diagonal() {
        // Black pawn on d2 attacks e1; a black pawn on e2 does not.
        assert!(scan("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1").in_check);
        assert!(!scan("4k3/8/8/8/8/8/4p3/4K3 w - - 0 1").in_check);
        // A white pawn that has already passed the black king attacks away from it.
        assert!(!scan("4K3/8/8/4P3/3k4/8/8/8 b - - 0 1").in_check);
        assert!(scan("4k3/3P4/8/8/8/8/8/4K3 b - - 0 1").in_check);
    }

    #[test]
    fn block_squares_run_from_king_to_checker() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN");
        let result = scan_pins_and_checks(game.board(), sq("e1"), Color::White);
        let squares = check_block_squares(sq("e1"), &result.checks[0], PieceKind::Rook);
        assert_eq!(squares, vec![sq("d1"), sq("c1"), sq("b1"), sq("a1")]);
    }

    #[test]
    fn own_king_is_transparent_when_probing_a_step() {
        // King on e1 checked along the rank; stepping to f1 stays on the ray.
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN");
        assert!(is_square_attacked(game.board(), sq("f1"), Color::White));
        assert!(!is_square_attacked(game.board(), sq("f2"), Color::White));
    }
}
