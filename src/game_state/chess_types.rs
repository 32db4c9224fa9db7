//! Primitive board types: colors, piece kinds, squares and castling flags.
//!
//! The board is a mailbox grid addressed by `(row, col)`. Row 0 is rank 8
//! (black's back rank) and row 7 is rank 1; column 0 is the a-file.

use std::fmt;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn advance.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row holding this side's king and rooks in the initial setup.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// `+1` for white, `-1` for black. Scores are white-positive.
    #[inline]
    pub const fn turn_multiplier(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Upper-case letter used by move labels and FEN.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A colored piece. Empty squares are `None` on the [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// 8x8 mailbox grid indexed `[row][col]`.
pub type Board = [[Option<Piece>; 8]; 8];

/// Row/column step used for rays, knight jumps and pin lines.
pub type Offset = (i8, i8);

/// A board coordinate. Construction outside `0..8` is a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    /// Panics when either coordinate is outside the board.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        assert!(
            row >= 0 && row < 8 && col >= 0 && col < 8,
            "square coordinates out of bounds"
        );
        Self { row, col }
    }

    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Dense `0..64` index, row-major from a8.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * 8 + self.col as usize
    }

    /// The square `steps` multiples of `offset` away, if still on the board.
    #[inline]
    pub const fn offset(self, offset: Offset, steps: i8) -> Option<Self> {
        Self::try_new(self.row + offset.0 * steps, self.col + offset.1 * steps)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col as u8);
        let rank = char::from(b'8' - self.row as u8);
        write!(f, "{file}{rank}")
    }
}

/// Movement history of one side's castling pieces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SideCastling {
    pub king_moved: bool,
    pub king_side_rook_moved: bool,
    pub queen_side_rook_moved: bool,
}

impl SideCastling {
    #[inline]
    pub const fn can_castle_king_side(self) -> bool {
        !self.king_moved && !self.king_side_rook_moved
    }

    #[inline]
    pub const fn can_castle_queen_side(self) -> bool {
        !self.king_moved && !self.queen_side_rook_moved
    }
}

/// Six "has moved" flags, three per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    sides: [SideCastling; 2],
}

impl CastlingRights {
    #[inline]
    pub const fn new(white: SideCastling, black: SideCastling) -> Self {
        Self {
            sides: [white, black],
        }
    }

    /// Rights with every king and rook marked as moved.
    #[inline]
    pub const fn none() -> Self {
        let moved = SideCastling {
            king_moved: true,
            king_side_rook_moved: true,
            queen_side_rook_moved: true,
        };
        Self::new(moved, moved)
    }

    #[inline]
    pub const fn side(&self, color: Color) -> SideCastling {
        self.sides[color.index()]
    }

    #[inline]
    pub(crate) fn side_mut(&mut self, color: Color) -> &mut SideCastling {
        &mut self.sides[color.index()]
    }

    /// Marks the rook whose home corner is `square` as moved. Used both when
    /// that rook leaves and when something captures on the corner.
    pub(crate) fn touch_corner(&mut self, square: Square) {
        for color in [Color::White, Color::Black] {
            if square.row() != color.home_row() {
                continue;
            }
            match square.col() {
                0 => self.side_mut(color).queen_side_rook_moved = true,
                7 => self.side_mut(color).king_side_rook_moved = true,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_display_uses_rank_eight_on_row_zero() {
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 7).to_string(), "h1");
        assert_eq!(Square::new(4, 4).to_string(), "e4");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn square_construction_fails_fast_off_board() {
        let _ = Square::new(8, 0);
    }

    #[test]
    fn offset_stops_at_board_edge() {
        let corner = Square::new(0, 7);
        assert_eq!(corner.offset((-1, 0), 1), None);
        assert_eq!(corner.offset((1, -1), 2), Some(Square::new(2, 5)));
    }

    #[test]
    fn touching_a_corner_marks_only_that_rook() {
        let mut rights = CastlingRights::default();
        rights.touch_corner(Square::new(7, 7));
        assert!(!rights.side(Color::White).can_castle_king_side());
        assert!(rights.side(Color::White).can_castle_queen_side());
        assert!(rights.side(Color::Black).can_castle_king_side());

        rights.touch_corner(Square::new(0, 0));
        assert!(!rights.side(Color::Black).can_castle_queen_side());
    }
}
