use super::super::attack_tables::{squares_in, KING_TARGETS};
use super::super::{Move, MoveList, Piece, PieceKind, Position, Square};

impl Position {
    pub(crate) fn generate_king_moves(&self, king: Piece, moves: &mut MoveList) {
        for to in squares_in(KING_TARGETS[king.square().index()]) {
            self.push_step(king, to, moves);
        }
        self.generate_castling_candidates(king, moves);
    }

    /// Castles whose rights, home squares and empty path are in order. Attack
    /// checks on the king's path happen in the legality filter.
    fn generate_castling_candidates(&self, king: Piece, moves: &mut MoveList) {
        let color = king.color();
        let row = color.back_rank();
        let Some(home) = Square::new(4, row) else {
            return;
        };
        if king.square() != home {
            return;
        }

        let rook_home = |file: usize| {
            Square::new(file, row)
                .and_then(|sq| self.piece_at(sq))
                .is_some_and(|p| p.kind() == PieceKind::Rook && p.color() == color)
        };
        let path_clear = |files: &[usize]| {
            files
                .iter()
                .filter_map(|&file| Square::new(file, row))
                .all(|sq| self.is_empty(sq))
        };

        if self.castling.has(color, true) && rook_home(7) && path_clear(&[5, 6]) {
            if let Some(to) = Square::new(6, row) {
                moves.push(Move::castle_kingside(home, to));
            }
        }
        if self.castling.has(color, false) && rook_home(0) && path_clear(&[1, 2, 3]) {
            if let Some(to) = Square::new(2, row) {
                moves.push(Move::castle_queenside(home, to));
            }
        }
    }
}
