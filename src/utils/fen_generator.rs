//! GameState-to-FEN generator.
//!
//! Emits the placement, side, castling and en-passant fields. The engine keeps
//! no move clocks, so the last two fields are always `0 1`.

use crate::game_state::{chess_types::*, game_state::GameState};

pub fn generate_fen(game_state: &GameState) -> String {
    let mut out = String::with_capacity(90);

    for (row, rank) in game_state.board().iter().enumerate() {
        let mut empty = 0u8;
        for piece in rank {
            match piece {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece_to_fen_char(*piece));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match game_state.side_to_move() {
        Color::White => 'w',
        Color::Black => 'b',
    });

    out.push(' ');
    out.push_str(&castling_field(game_state));

    out.push(' ');
    match game_state.en_passant_target() {
        Some(square) => out.push_str(&square.to_string()),
        None => out.push('-'),
    }

    out.push_str(" 0 1");
    out
}

fn castling_field(game_state: &GameState) -> String {
    let mut field = String::new();
    for (color, king_side, queen_side) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
        let side = game_state.castling_rights().side(color);
        if side.can_castle_king_side() {
            field.push(king_side);
        }
        if side.can_castle_queen_side() {
            field.push(queen_side);
        }
    }
    if field.is_empty() {
        field.push('-');
    }
    field
}

fn piece_to_fen_char(piece: Piece) -> char {
    let letter = piece.kind.letter();
    match piece.color {
        Color::White => letter,
        Color::Black => letter.to_ascii_lowercase(),
    }
}
