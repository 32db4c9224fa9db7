//! Per-color piece counts kept in step with the board by make/undo.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialCount {
    counts: [[u8; 6]; 2],
}

impl MaterialCount {
    pub fn from_board(board: &Board) -> Self {
        let mut material = Self::default();
        for piece in board.iter().flatten().flatten() {
            material.add(*piece);
        }
        material
    }

    #[inline]
    pub const fn get(&self, color: Color, kind: PieceKind) -> u8 {
        self.counts[color.index()][kind.index()]
    }

    #[inline]
    pub(crate) fn add(&mut self, piece: Piece) {
        self.counts[piece.color.index()][piece.kind.index()] += 1;
    }

    #[inline]
    pub(crate) fn remove(&mut self, piece: Piece) {
        let slot = &mut self.counts[piece.color.index()][piece.kind.index()];
        *slot = slot.saturating_sub(1);
    }

    /// Count of `kind` summed over both colors.
    #[inline]
    pub const fn both(&self, kind: PieceKind) -> u8 {
        self.get(Color::White, kind) + self.get(Color::Black, kind)
    }

    /// Both queens are off the board.
    #[inline]
    pub const fn queens_off(&self) -> bool {
        self.both(PieceKind::Queen) == 0
    }

    /// Bare kings, or a single knight or bishop against a bare king.
    ///
    /// This is the only drawn-by-material rule the engine knows; K+N vs K+N or
    /// two knights against a king still count as playable.
    pub const fn is_insufficient(&self) -> bool {
        if self.both(PieceKind::Pawn) != 0
            || self.both(PieceKind::Rook) != 0
            || self.both(PieceKind::Queen) != 0
        {
            return false;
        }
        if self.get(Color::White, PieceKind::King) != 1 || self.get(Color::Black, PieceKind::King) != 1
        {
            return false;
        }
        self.both(PieceKind::Knight) + self.both(PieceKind::Bishop) <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::MaterialCount;
    use crate::game_state::chess_types::*;

    fn with(pieces: &[(Color, PieceKind)]) -> MaterialCount {
        let mut material = MaterialCount::default();
        material.add(Piece::new(Color::White, PieceKind::King));
        material.add(Piece::new(Color::Black, PieceKind::King));
        for (color, kind) in pieces {
            material.add(Piece::new(*color, *kind));
        }
        material
    }

    #[test]
    fn single_minor_is_insufficient() {
        assert!(with(&[]).is_insufficient());
        assert!(with(&[(Color::White, PieceKind::Bishop)]).is_insufficient());
        assert!(with(&[(Color::Black, PieceKind::Knight)]).is_insufficient());
    }

    #[test]
    fn two_minors_or_any_major_is_playable() {
        assert!(!with(&[(Color::White, PieceKind::Knight), (Color::Black, PieceKind::Knight)])
            .is_insufficient());
        assert!(!with(&[(Color::White, PieceKind::Knight), (Color::White, PieceKind::Knight)])
            .is_insufficient());
        assert!(!with(&[(Color::White, PieceKind::Pawn)]).is_insufficient());
        assert!(!with(&[(Color::Black, PieceKind::Rook)]).is_insufficient());
    }

    #[test]
    fn remove_never_underflows() {
        let mut material = MaterialCount::default();
        material.remove(Piece::new(Color::White, PieceKind::Queen));
        assert_eq!(material.get(Color::White, PieceKind::Queen), 0);
    }
}
