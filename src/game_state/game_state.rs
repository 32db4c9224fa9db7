//! Core mailbox board state.
//!
//! `GameState` is the position the engine works on: the grid, side to move,
//! king locations, castling flags, en-passant target, terminal flags, material
//! counts and the undo history. Outside the crate it is read-only apart from
//! `make_move`, `undo_move` and `legal_moves`, which keep the derived fields
//! (king locations, material, terminal flags) consistent with the board.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;
use crate::game_state::material_count::MaterialCount;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) king_locations: [Square; 2],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
    pub(crate) material: MaterialCount,
    pub(crate) history: Vec<UndoState>,
}

/// Everything that identifies a position for equality checks: the fields
/// `undo_move` must restore plus the history depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSnapshot {
    pub board: Board,
    pub side_to_move: Color,
    pub king_locations: [Square; 2],
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub ply: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// The standard initial setup with white to move.
    pub fn new_game() -> Self {
        let mut board: Board = [[None; 8]; 8];
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board[0][col] = Some(Piece::new(Color::Black, *kind));
            board[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board[7][col] = Some(Piece::new(Color::White, *kind));
        }

        Self {
            board,
            side_to_move: Color::White,
            king_locations: [Square::new(7, 4), Square::new(0, 4)],
            castling_rights: CastlingRights::default(),
            en_passant_target: None,
            checkmate: false,
            stalemate: false,
            material: MaterialCount::from_board(&board),
            history: Vec::new(),
        }
    }

    /// Assembles a position from raw parts, deriving king locations and
    /// material. Fails when either side has no king.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) -> ChessResult<Self> {
        let white_king = find_king(&board, Color::White).ok_or(ChessError::MissingKing(Color::White))?;
        let black_king = find_king(&board, Color::Black).ok_or(ChessError::MissingKing(Color::Black))?;

        Ok(Self {
            board,
            side_to_move,
            king_locations: [white_king, black_king],
            castling_rights,
            en_passant_target,
            checkmate: false,
            stalemate: false,
            material: MaterialCount::from_board(&board),
            history: Vec::new(),
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        self.king_locations[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Set by the last `legal_moves` call on this position.
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Set by the last `legal_moves` call on this position, including draws
    /// by insufficient material.
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[inline]
    pub fn material_count(&self) -> &MaterialCount {
        &self.material
    }

    /// Number of applied moves still on the history stack.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| entry.mv)
    }

    pub fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            board: self.board,
            side_to_move: self.side_to_move,
            king_locations: self.king_locations,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            ply: self.history.len(),
        }
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row() as usize][square.col() as usize] = piece;
    }
}

fn find_king(board: &Board, color: Color) -> Option<Square> {
    let king = Some(Piece::new(color, PieceKind::King));
    for (row, rank) in board.iter().enumerate() {
        for (col, piece) in rank.iter().enumerate() {
            if *piece == king {
                return Some(Square::new(row as i8, col as i8));
            }
        }
    }
    None
}
