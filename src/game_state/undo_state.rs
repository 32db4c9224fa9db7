use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

/// Single history record pushed by `make_move` and popped by `undo_move`.
///
/// One entry per applied move keeps the move, en-passant and castling
/// histories the same length by construction.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub mv: Move,
    pub prev_en_passant_target: Option<Square>,
    pub prev_castling_rights: CastlingRights,
    pub prev_checkmate: bool,
    pub prev_stalemate: bool,
}
