use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, KING_START_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{is_empty_or_enemy, KING_DIRECTIONS};
use crate::moves::chess_move::Move;

/// One-step king moves that do not walk into an attacked square.
///
/// The destination is probed with the detector while the king still stands on
/// its origin; the detector treats the moving side's own king as transparent,
/// so stepping backwards along a checking ray is correctly refused.
pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    for direction in KING_DIRECTIONS {
        let Some(to) = from.offset(direction, 1) else {
            continue;
        };
        if !is_empty_or_enemy(game_state, to, side) {
            continue;
        }
        if !is_square_attacked(game_state.board(), to, side) {
            out.push(Move::new(from, to, game_state.board()));
        }
    }
}

/// Castling for the side to move. Callers only ask when the king is not in
/// check.
pub fn generate_castle_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let rights = game_state.castling_rights().side(side);
    let home = side.home_row();

    if from != Square::new(home, KING_START_COL) {
        return;
    }
    if is_square_attacked(game_state.board(), from, side) {
        return;
    }

    if rights.can_castle_king_side() {
        try_castle(game_state, from, KING_SIDE_ROOK_COL, 1, out);
    }
    if rights.can_castle_queen_side() {
        try_castle(game_state, from, QUEEN_SIDE_ROOK_COL, -1, out);
    }
}

fn try_castle(game_state: &GameState, king: Square, rook_col: i8, step: i8, out: &mut Vec<Move>) {
    let side = game_state.side_to_move();
    let row = king.row();

    if game_state.piece_at(Square::new(row, rook_col)) != Some(Piece::new(side, PieceKind::Rook)) {
        return;
    }

    let mut col = king.col() + step;
    while col != rook_col {
        if game_state.piece_at(Square::new(row, col)).is_some() {
            return;
        }
        col += step;
    }

    // The king crosses one square and lands on the next; both must be safe.
    for distance in 1..=2 {
        let transit = Square::new(row, king.col() + step * distance);
        if is_square_attacked(game_state.board(), transit, side) {
            return;
        }
    }

    out.push(Move::castle(
        king,
        Square::new(row, king.col() + step * 2),
        game_state.board(),
    ));
}

#[cfg(test)]
mod tests {
    use super::{generate_castle_moves, generate_king_moves};
    use crate::game_state::game_state::GameState;
    use crate::moves::chess_move::Move;

    fn castles(fen: &str) -> Vec<String> {
        let game = GameState::from_fen(fen).expect("test FEN should parse");
        let mut out: Vec<Move> = Vec::new();
        generate_castle_moves(&game, game.king_location(game.side_to_move()), &mut out);
        out.iter().map(|mv| mv.describe()).collect()
    }

    #[test]
    fn both_castles_available_with_clear_paths() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1"), vec!["O-O", "O-O-O"]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1"), vec!["O-O", "O-O-O"]);
    }

    #[test]
    fn moved_rook_or_king_forbids_castling() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w Q - 0 1"), vec!["O-O-O"]);
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").is_empty());
    }

    #[test]
    fn attacked_transit_square_forbids_castling() {
        // Black rook on f8 covers f1; queen side stays legal.
        assert_eq!(castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["O-O-O"]);
        // Attack on the b-file square only does not stop queen-side castling.
        assert_eq!(castles("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["O-O", "O-O-O"]);
        // Attack on the landing square g1.
        assert_eq!(castles("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1"), vec!["O-O-O"]);
    }

    #[test]
    fn blocked_path_forbids_castling() {
        assert_eq!(castles("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1"), Vec::<String>::new());
    }

    #[test]
    fn king_cannot_retreat_along_the_checking_ray() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN");
        let mut out = Vec::new();
        generate_king_moves(&game, game.king_location(game.side_to_move()), &mut out);
        let labels: Vec<String> = out.iter().map(|mv| mv.describe()).collect();
        assert_eq!(labels.len(), 3);
        assert!(labels.iter().all(|label| label.ends_with('2')));
    }
}
