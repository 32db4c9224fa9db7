//! Full legal move generation pipeline.
//!
//! Scans pins and checks once from the king, dispatches per-piece generators
//! that already respect pins, filters the result against the current check,
//! and records the checkmate/stalemate flags on the position.

use tracing::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{check_block_squares, scan_pins_and_checks};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

impl GameState {
    /// Every legal move for the side to move, ordered by `Move::priority`.
    ///
    /// Also sets `is_checkmate`/`is_stalemate` for this position. Takes
    /// `&mut self` only for those flags; the board is left untouched.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        let side = self.side_to_move;
        let king_square = self.king_location(side);
        let pins = scan_pins_and_checks(&self.board, king_square, side);

        let mut moves = Vec::with_capacity(64);
        for row in 0..8 {
            for col in 0..8 {
                let from = Square::new(row, col);
                let Some(piece) = self.piece_at(from) else {
                    continue;
                };
                if piece.color != side {
                    continue;
                }
                match piece.kind {
                    PieceKind::Pawn => generate_pawn_moves(self, from, &pins, &mut moves),
                    PieceKind::Knight => generate_knight_moves(self, from, &pins, &mut moves),
                    PieceKind::Bishop => generate_bishop_moves(self, from, &pins, &mut moves),
                    PieceKind::Rook => generate_rook_moves(self, from, &pins, &mut moves),
                    PieceKind::Queen => generate_queen_moves(self, from, &pins, &mut moves),
                    PieceKind::King => generate_king_moves(self, from, &mut moves),
                }
            }
        }

        if pins.is_double_check() {
            moves.retain(|mv| mv.piece_moved().kind == PieceKind::King);
        } else if let Some(check) = pins.checks.first() {
            let checker = self
                .piece_at(check.checker)
                .map_or(PieceKind::Knight, |piece| piece.kind);
            let blocks = check_block_squares(king_square, check, checker);
            moves.retain(|mv| {
                mv.piece_moved().kind == PieceKind::King
                    || blocks.contains(&mv.end())
                    || (mv.is_en_passant() && blocks.contains(&mv.capture_square()))
            });
        } else {
            generate_castle_moves(self, king_square, &mut moves);
        }

        self.checkmate = moves.is_empty() && pins.in_check;
        self.stalemate = !self.checkmate && (moves.is_empty() || self.material.is_insufficient());
        if self.checkmate || self.stalemate {
            trace!(
                checkmate = self.checkmate,
                stalemate = self.stalemate,
                ply = self.ply(),
                "terminal position"
            );
        }

        moves.sort_by_key(Move::priority);
        moves
    }

    /// The legal move from `start` to `end`, if any. Promotion always yields
    /// a queen, so the pair is unambiguous.
    pub fn find_legal_move(&mut self, start: Square, end: Square) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.start() == start && mv.end() == end)
    }
}
