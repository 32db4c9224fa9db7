//! Move flag bits, ordering priorities, and the short algebraic label.

use std::fmt;

use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::Move;

pub const FLAG_EN_PASSANT: u8 = 1 << 0;
pub const FLAG_CASTLE: u8 = 1 << 1;
pub const FLAG_PROMOTION: u8 = 1 << 2;

// Lower values are searched first.
pub const PRIORITY_PROMOTION: u8 = 0;
pub const PRIORITY_EN_PASSANT: u8 = 1;
pub const PRIORITY_CAPTURE: u8 = 2;
pub const PRIORITY_CASTLE: u8 = 2;
pub const PRIORITY_MINOR_QUIET: u8 = 3;
pub const PRIORITY_MAJOR_QUIET: u8 = 4;
pub const PRIORITY_PAWN_KING_QUIET: u8 = 5;

impl Move {
    /// Minimal algebraic label: `e4`, `exd5`, `e8=Q`, `Nf3`, `Bxc6`, `O-O`,
    /// `O-O-O`. Check and mate suffixes are left to the presentation layer.
    pub fn describe(&self) -> String {
        if self.is_castle() {
            return if self.end().col() > self.start().col() {
                "O-O".to_owned()
            } else {
                "O-O-O".to_owned()
            };
        }

        let mut out = String::with_capacity(6);
        let kind = self.piece_moved().kind;
        if kind == PieceKind::Pawn {
            if self.is_capture() {
                let start = self.start().to_string();
                out.push_str(&start[..1]);
                out.push('x');
            }
            out.push_str(&self.end().to_string());
            if self.is_pawn_promotion() {
                out.push_str("=Q");
            }
        } else {
            out.push(kind.letter());
            if self.is_capture() {
                out.push('x');
            }
            out.push_str(&self.end().to_string());
        }
        out
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
