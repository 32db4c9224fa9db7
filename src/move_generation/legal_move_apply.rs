//! In-place move application and reversal.
//!
//! `make_move` trusts its input: the move must come from `legal_moves` on the
//! current position. Everything it changes besides the board squares touched
//! by the move is recorded in one `UndoState` so `undo_move` can restore the
//! prior position exactly.

use tracing::warn;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

/// Rook start and end columns for a castle whose king lands on `king_end_col`.
fn castle_rook_cols(king_start_col: i8, king_end_col: i8) -> (i8, i8) {
    if king_end_col > king_start_col {
        (KING_SIDE_ROOK_COL, king_end_col - 1)
    } else {
        (QUEEN_SIDE_ROOK_COL, king_end_col + 1)
    }
}

impl GameState {
    pub fn make_move(&mut self, mv: Move) {
        let side = self.side_to_move;
        let moved = mv.piece_moved();

        self.history.push(UndoState {
            mv,
            prev_en_passant_target: self.en_passant_target,
            prev_castling_rights: self.castling_rights,
            prev_checkmate: self.checkmate,
            prev_stalemate: self.stalemate,
        });

        if let Some(captured) = mv.piece_captured() {
            self.material.remove(captured);
            if mv.is_en_passant() {
                self.set_piece(mv.capture_square(), None);
            }
        }

        self.set_piece(mv.start(), None);
        if mv.is_pawn_promotion() {
            let queen = Piece::new(side, PieceKind::Queen);
            self.material.remove(moved);
            self.material.add(queen);
            self.set_piece(mv.end(), Some(queen));
        } else {
            self.set_piece(mv.end(), Some(moved));
        }

        if mv.is_castle() {
            let row = mv.start().row();
            let (rook_from, rook_to) = castle_rook_cols(mv.start().col(), mv.end().col());
            let rook = self.piece_at(Square::new(row, rook_from));
            self.set_piece(Square::new(row, rook_from), None);
            self.set_piece(Square::new(row, rook_to), rook);
        }

        if moved.kind == PieceKind::King {
            self.king_locations[side.index()] = mv.end();
            self.castling_rights.side_mut(side).king_moved = true;
        }
        self.castling_rights.touch_corner(mv.start());
        self.castling_rights.touch_corner(mv.end());

        self.en_passant_target = if moved.kind == PieceKind::Pawn
            && (mv.end().row() - mv.start().row()).abs() == 2
        {
            Some(Square::new(
                (mv.start().row() + mv.end().row()) / 2,
                mv.start().col(),
            ))
        } else {
            None
        };

        self.checkmate = false;
        self.stalemate = false;
        self.side_to_move = side.opposite();
    }

    /// Reverts the most recent `make_move`. With an empty history the
    /// position is left unchanged and `NothingToUndo` is returned.
    pub fn undo_move(&mut self) -> ChessResult<Move> {
        let Some(entry) = self.history.pop() else {
            warn!("undo requested with empty move history");
            return Err(ChessError::NothingToUndo);
        };

        let mv = entry.mv;
        let moved = mv.piece_moved();
        let side = moved.color;

        self.set_piece(mv.start(), Some(moved));
        if mv.is_pawn_promotion() {
            self.material.remove(Piece::new(side, PieceKind::Queen));
            self.material.add(moved);
        }

        match mv.piece_captured() {
            Some(captured) if mv.is_en_passant() => {
                self.set_piece(mv.end(), None);
                self.set_piece(mv.capture_square(), Some(captured));
                self.material.add(captured);
            }
            Some(captured) => {
                self.set_piece(mv.end(), Some(captured));
                self.material.add(captured);
            }
            None => self.set_piece(mv.end(), None),
        }

        if mv.is_castle() {
            let row = mv.start().row();
            let (rook_from, rook_to) = castle_rook_cols(mv.start().col(), mv.end().col());
            let rook = self.piece_at(Square::new(row, rook_to));
            self.set_piece(Square::new(row, rook_to), None);
            self.set_piece(Square::new(row, rook_from), rook);
        }

        if moved.kind == PieceKind::King {
            self.king_locations[side.index()] = mv.start();
        }

        self.en_passant_target = entry.prev_en_passant_target;
        self.castling_rights = entry.prev_castling_rights;
        self.checkmate = entry.prev_checkmate;
        self.stalemate = entry.prev_stalemate;
        self.side_to_move = side;

        Ok(mv)
    }
}
