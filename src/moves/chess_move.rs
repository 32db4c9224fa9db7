//! Immutable move value produced by the generators.
//!
//! A `Move` captures everything `make_move`/`undo_move` need to apply and
//! reverse the transition without consulting the board again: the pieces
//! involved, the special-move flags, and an ordering priority for search.

use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{
    FLAG_CASTLE, FLAG_EN_PASSANT, FLAG_PROMOTION, PRIORITY_CAPTURE, PRIORITY_CASTLE,
    PRIORITY_EN_PASSANT, PRIORITY_MAJOR_QUIET, PRIORITY_MINOR_QUIET, PRIORITY_PAWN_KING_QUIET,
    PRIORITY_PROMOTION,
};

#[derive(Debug, Clone, Copy)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    flags: u8,
    priority: u8,
}

impl Move {
    /// Builds an ordinary move (or capture, or promotion) from the board.
    ///
    /// Panics when `start` is empty: generators only build moves for pieces
    /// that exist.
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        Self::with_flags(start, end, board, 0)
    }

    /// En-passant capture; the victim sits beside `start`, not on `end`.
    pub fn en_passant(start: Square, end: Square, board: &Board) -> Self {
        Self::with_flags(start, end, board, FLAG_EN_PASSANT)
    }

    /// King move of two files; the rook is relocated by `make_move`.
    pub fn castle(start: Square, end: Square, board: &Board) -> Self {
        Self::with_flags(start, end, board, FLAG_CASTLE)
    }

    fn with_flags(start: Square, end: Square, board: &Board, mut flags: u8) -> Self {
        let Some(piece_moved) = board[start.row() as usize][start.col() as usize] else {
            panic!("no piece on move start square {start}");
        };

        let piece_captured = if flags & FLAG_EN_PASSANT != 0 {
            Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn))
        } else {
            board[end.row() as usize][end.col() as usize]
        };

        if piece_moved.kind == PieceKind::Pawn && end.row() == piece_moved.color.promotion_row() {
            flags |= FLAG_PROMOTION;
        }

        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            flags,
            priority: priority_for(piece_moved.kind, piece_captured.is_some(), flags),
        }
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    #[inline]
    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    #[inline]
    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.flags & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.flags & FLAG_CASTLE != 0
    }

    #[inline]
    pub fn is_pawn_promotion(&self) -> bool {
        self.flags & FLAG_PROMOTION != 0
    }

    /// Ordering rank for search; lower is tried first.
    #[inline]
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Square of the pawn removed by an en-passant capture, otherwise `end`.
    #[inline]
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant() {
            Square::new(self.start.row(), self.end.col())
        } else {
            self.end
        }
    }

    /// Identity key over (start, end, flags). Unique among the moves of a
    /// single position.
    #[inline]
    pub fn id(&self) -> u32 {
        ((self.start.index() as u32) << 11) | ((self.end.index() as u32) << 5) | self.flags as u32
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

fn priority_for(kind: PieceKind, is_capture: bool, flags: u8) -> u8 {
    if flags & FLAG_PROMOTION != 0 {
        return PRIORITY_PROMOTION;
    }
    if flags & FLAG_EN_PASSANT != 0 {
        return PRIORITY_EN_PASSANT;
    }
    if is_capture {
        return PRIORITY_CAPTURE;
    }
    if flags & FLAG_CASTLE != 0 {
        return PRIORITY_CASTLE;
    }
    match kind {
        PieceKind::Knight | PieceKind::Bishop => PRIORITY_MINOR_QUIET,
        PieceKind::Rook | PieceKind::Queen => PRIORITY_MAJOR_QUIET,
        PieceKind::Pawn | PieceKind::King => PRIORITY_PAWN_KING_QUIET,
    }
}
