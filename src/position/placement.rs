//! The 64-slot piece grid and attack queries over it.

use super::attack_tables::{
    squares_in, BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, PAWN_ATTACKS, ROOK_DIRECTIONS,
};
use super::types::{Color, Piece, PieceKind, Square};

/// Piece placement indexed by square.
///
/// A plain fixed-size array: copying a placement copies every piece, so two
/// positions never share piece state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    squares: [Option<Piece>; 64],
}

impl Placement {
    pub(crate) const fn empty() -> Self {
        Placement {
            squares: [None; 64],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Place a piece, rebinding it to `sq`. Returns whatever stood there.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, mut piece: Piece) -> Option<Piece> {
        piece.set_square(sq);
        self.squares[sq.index()].replace(piece)
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// All pieces in square index order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().copied()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color() == color)
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.kind() == PieceKind::King)
            .map(Piece::square)
    }

    #[inline]
    fn holds(&self, sq: Square, color: Color, kinds: &[PieceKind]) -> bool {
        self.piece_at(sq)
            .is_some_and(|piece| piece.color() == color && kinds.contains(&piece.kind()))
    }

    /// Would a piece of `attacker` be able to capture on `square`?
    ///
    /// Pawns only count their diagonal capture squares. Works on empty squares
    /// too, which castling legality relies on.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        // A defender's pawn on `square` would attack exactly the squares from
        // which an attacking pawn hits `square`.
        let pawn_sources = PAWN_ATTACKS[attacker.opponent().index()][square.index()];
        if squares_in(pawn_sources).any(|sq| self.holds(sq, attacker, &[PieceKind::Pawn])) {
            return true;
        }

        if squares_in(KNIGHT_TARGETS[square.index()])
            .any(|sq| self.holds(sq, attacker, &[PieceKind::Knight]))
        {
            return true;
        }

        if squares_in(KING_TARGETS[square.index()])
            .any(|sq| self.holds(sq, attacker, &[PieceKind::King]))
        {
            return true;
        }

        let straight = [PieceKind::Rook, PieceKind::Queen];
        let diagonal = [PieceKind::Bishop, PieceKind::Queen];
        ROOK_DIRECTIONS
            .iter()
            .any(|&dir| self.first_blocker_holds(square, dir, attacker, &straight))
            || BISHOP_DIRECTIONS
                .iter()
                .any(|&dir| self.first_blocker_holds(square, dir, attacker, &diagonal))
    }

    fn first_blocker_holds(
        &self,
        from: Square,
        (df, dr): (isize, isize),
        color: Color,
        kinds: &[PieceKind],
    ) -> bool {
        let mut current = from;
        while let Some(next) = current.offset(df, dr) {
            if !self.is_empty(next) {
                return self.holds(next, color, kinds);
            }
            current = next;
        }
        false
    }

    /// Is the king of `color` attacked? False if that king is absent.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}

impl std::fmt::Debug for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..8).rev() {
            for file in 0..8 {
                let c = Square::new(file, row)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::to_fen_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
