//! Pluggable board evaluation interfaces and the baseline piece-square scorer.
//!
//! Search stays independent of the heuristic by delegating static position
//! scoring to `BoardScorer`. Scores are always from white's point of view;
//! the search applies the turn multiplier.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Score of a mated position. Larger than any reachable material sum.
pub const CHECKMATE: i32 = 60_000;
pub const STALEMATE: i32 = 0;

pub trait BoardScorer: Send + Sync {
    /// Positive favours white, negative favours black.
    fn score(&self, game_state: &GameState) -> i32;
}

type PieceSquareTable = [[i32; 8]; 8];

// Tables are written from white's side, row 0 = rank 8.
const PAWN_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: PieceSquareTable = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP_TABLE: PieceSquareTable = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const QUEEN_TABLE: PieceSquareTable = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const KING_MIDDLE_GAME_TABLE: PieceSquareTable = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

const KING_END_GAME_TABLE: PieceSquareTable = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-30, -20, -10, 0, 0, -10, -20, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -30, 0, 0, 0, 0, -30, -30],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];

/// Material plus piece-square terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl PieceSquareScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20_000,
        }
    }

    /// Positional bonus for `piece` on `square`. Black reads the white table
    /// mirrored top to bottom.
    pub fn positional_value(piece: Piece, square: Square, end_game: bool) -> i32 {
        let table = match piece.kind {
            PieceKind::Pawn => &PAWN_TABLE,
            PieceKind::Knight => &KNIGHT_TABLE,
            PieceKind::Bishop => &BISHOP_TABLE,
            PieceKind::Rook => &ROOK_TABLE,
            PieceKind::Queen => &QUEEN_TABLE,
            PieceKind::King if end_game => &KING_END_GAME_TABLE,
            PieceKind::King => &KING_MIDDLE_GAME_TABLE,
        };
        let row = match piece.color {
            Color::White => square.row(),
            Color::Black => 7 - square.row(),
        };
        table[row as usize][square.col() as usize]
    }
}

impl BoardScorer for PieceSquareScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        if game_state.is_checkmate() {
            return -game_state.side_to_move().turn_multiplier() * CHECKMATE;
        }
        if game_state.is_stalemate() {
            return STALEMATE;
        }

        let material = game_state.material_count();
        let end_game = material.queens_off();
        let scale = if end_game
            && (material.get(Color::White, PieceKind::Rook) == 0
                || material.get(Color::Black, PieceKind::Rook) == 0)
        {
            2
        } else {
            1
        };

        let mut score = 0;
        for (row, rank) in game_state.board().iter().enumerate() {
            for (col, slot) in rank.iter().enumerate() {
                let Some(piece) = *slot else {
                    continue;
                };
                let square = Square::new(row as i8, col as i8);
                let positional = Self::positional_value(piece, square, end_game);
                let value = if piece.kind == PieceKind::King {
                    Self::piece_value(piece.kind) + positional
                } else {
                    Self::piece_value(piece.kind) + positional * scale
                };
                score += piece.color.turn_multiplier() * value;
            }
        }
        score
    }
}
