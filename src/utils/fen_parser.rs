//! FEN-to-GameState parser.
//!
//! Builds a position from a Forsyth-Edwards Notation string. The castling
//! field is mapped onto the engine's "has moved" flags: a missing `K` marks
//! white's king-side rook as moved, and a side with no rights at all is
//! treated as having moved its king. Clock fields are validated and dropped.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState, material_count::MaterialCount};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(&format!("invalid move clock: {clock}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part)?;

    check_king_counts(&board)?;
    if let Some(target) = en_passant_target {
        check_en_passant_target(&board, side_to_move, target)?;
    }

    GameState::from_parts(board, side_to_move, castling_rights, en_passant_target)
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board: Board = [[None; 8]; 8];
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;

            if col >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let side = rights.side_mut(color);
        match ch.to_ascii_lowercase() {
            'k' => side.king_side_rook_moved = false,
            'q' => side.queen_side_rook_moved = false,
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
        side.king_moved = false;
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(&format!("invalid en-passant square: {en_passant_part}")))
}

/// Missing kings are reported by `GameState::from_parts`; this rejects extras.
fn check_king_counts(board: &Board) -> ChessResult<()> {
    let material = MaterialCount::from_board(board);
    for color in [Color::White, Color::Black] {
        if material.get(color, PieceKind::King) > 1 {
            return Err(invalid(&format!("more than one {color:?} king")));
        }
    }
    Ok(())
}

/// The target must be the empty square a pawn of the side that just moved
/// skipped over, with that pawn standing right behind it.
fn check_en_passant_target(board: &Board, side_to_move: Color, target: Square) -> ChessResult<()> {
    let (target_row, pawn_row) = match side_to_move {
        Color::White => (2, 3),
        Color::Black => (5, 4),
    };
    let col = target.col() as usize;
    let mover = side_to_move.opposite();

    if target.row() != target_row {
        return Err(invalid("en-passant square is on the wrong rank for the side to move"));
    }
    if board[target_row as usize][col].is_some() {
        return Err(invalid("en-passant square is occupied"));
    }
    if board[pawn_row][col] != Some(Piece::new(mover, PieceKind::Pawn)) {
        return Err(invalid("no pawn behind the en-passant square"));
    }
    Ok(())
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
