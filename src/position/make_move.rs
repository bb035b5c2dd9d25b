use super::error::MoveError;
use super::state::Position;
use super::types::{Color, Move, Piece, PieceKind, SpecialMove, Square};

impl Position {
    /// Apply a move without checking it against the legal-move set.
    ///
    /// Used on scratch copies during legality filtering and perft. Does not
    /// touch the history.
    pub(crate) fn make_move_unchecked(&mut self, mv: &Move) {
        let Some(mut piece) = self.placement.take(mv.from()) else {
            return;
        };
        let color = piece.color();
        let is_pawn_move = piece.kind() == PieceKind::Pawn;

        let captured = if mv.is_en_passant() {
            // The captured pawn sits beside the mover, not on the destination.
            Square::new(mv.to().file(), mv.from().row()).and_then(|sq| self.placement.take(sq))
        } else {
            self.placement.take(mv.to())
        };

        if let Some(kind) = mv.promotion() {
            piece = Piece::new(kind, color, mv.to());
        }
        self.placement.put(mv.to(), piece);

        match mv.special() {
            SpecialMove::KingSideCastle => self.relocate_rook(color, 7, 5),
            SpecialMove::QueenSideCastle => self.relocate_rook(color, 0, 3),
            SpecialMove::None | SpecialMove::DoublePawnPush => {}
        }

        self.castling.clear_for_square(mv.from());
        self.castling.clear_for_square(mv.to());

        self.en_passant = if mv.is_double_pawn_push() {
            Square::new(mv.from().file(), (mv.from().row() + mv.to().row()) / 2)
        } else {
            None
        };

        if is_pawn_move || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();

        log::trace!("applied {mv} for {color}");
    }

    fn relocate_rook(&mut self, color: Color, from_file: usize, to_file: usize) {
        let row = color.back_rank();
        let (Some(from), Some(to)) = (Square::new(from_file, row), Square::new(to_file, row)) else {
            return;
        };
        if let Some(rook) = self.placement.take(from) {
            self.placement.put(to, rook);
        }
    }

    /// Apply a legal move in place and record the resulting signature.
    ///
    /// A move outside the current legal set is refused with
    /// [`MoveError::Illegal`] and the position is left untouched.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        if !self.legal_moves().contains(mv) {
            log::debug!("refused illegal move {mv:?}");
            return Err(MoveError::Illegal { mv: *mv });
        }
        self.commit_move(mv);
        Ok(())
    }

    /// Make a move already known to be legal and record its signature.
    pub(crate) fn commit_move(&mut self, mv: &Move) {
        self.make_move_unchecked(mv);
        let signature = self.signature();
        self.history.push(signature);
    }

    /// Like [`Position::apply_move`], but returns the successor and leaves
    /// `self` alone.
    pub fn with_move(&self, mv: &Move) -> Result<Position, MoveError> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }
}
