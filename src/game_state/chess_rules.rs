//! Canonical chess-rule constants.
//!
//! Initial setup literals plus the king/rook columns that castling relies on.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from the a-file to the h-file, shared by both sides.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_COL: i8 = 4;
pub const KING_SIDE_ROOK_COL: i8 = 7;
pub const QUEEN_SIDE_ROOK_COL: i8 = 0;
