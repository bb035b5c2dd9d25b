//! Pseudo-legal move generation per piece, and the legality filter on top.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Move, MoveList, Piece, PieceKind, Position, Square};

impl Piece {
    /// Moves this piece's geometry allows from its current square.
    ///
    /// Respects occupancy but not king safety. Castling candidates are
    /// included for a king on its home square.
    pub fn pseudo_legal_moves(&self, position: &Position) -> MoveList {
        let mut moves = MoveList::new();
        position.generate_piece_moves(*self, &mut moves);
        moves
    }
}

impl Position {
    fn generate_piece_moves(&self, piece: Piece, moves: &mut MoveList) {
        match piece.kind() {
            PieceKind::Pawn => self.generate_pawn_moves(piece, moves),
            PieceKind::Knight => self.generate_knight_moves(piece, moves),
            PieceKind::Bishop => self.generate_slider_moves(piece, &BISHOP_DIRECTIONS, moves),
            PieceKind::Rook => self.generate_slider_moves(piece, &ROOK_DIRECTIONS, moves),
            PieceKind::Queen => self.generate_slider_moves(piece, &QUEEN_DIRECTIONS, moves),
            PieceKind::King => self.generate_king_moves(piece, moves),
        }
    }

    /// Quiet move onto an empty square, capture onto an enemy, nothing onto
    /// a friendly piece.
    #[inline]
    pub(crate) fn push_step(&self, piece: Piece, to: Square, moves: &mut MoveList) {
        match self.color_at(to) {
            None => moves.push(Move::quiet(piece.square(), to)),
            Some(color) if color != piece.color() => {
                moves.push(Move::capture(piece.square(), to));
            }
            Some(_) => {}
        }
    }

    /// Pseudo-legal moves of every piece belonging to the side to move.
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for piece in self.placement.pieces_of(self.side_to_move) {
            self.generate_piece_moves(piece, &mut moves);
        }
        moves
    }

    /// All legal moves for the side to move, in generation order.
    ///
    /// Each candidate is tried on a scratch copy and dropped if it leaves the
    /// mover's king attacked. The position itself is never modified.
    pub fn legal_moves(&self) -> MoveList {
        let mover = self.side_to_move;
        let opponent = mover.opponent();
        let mut legal = MoveList::new();

        for mv in &self.pseudo_legal_moves() {
            if mv.is_castling() {
                let passed_file = (mv.from().file() + mv.to().file()) / 2;
                let Some(passed) = Square::new(passed_file, mv.from().row()) else {
                    continue;
                };
                if [mv.from(), passed, mv.to()]
                    .iter()
                    .any(|&sq| self.is_square_attacked(sq, opponent))
                {
                    continue;
                }
            }

            let mut trial = self.scratch();
            trial.make_move_unchecked(mv);
            if !trial.is_king_in_check(mover) {
                legal.push(*mv);
            }
        }
        legal
    }

    /// Find the legal move joining `from` and `to`.
    ///
    /// `promotion` only matters when the move promotes; then it has to name
    /// the chosen piece. Returns `None` if nothing legal matches.
    pub fn try_to_infer_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Option<Move> {
        self.legal_moves().into_iter().find(|mv| {
            mv.from() == from
                && mv.to() == to
                && (!mv.is_promotion() || mv.promotion() == promotion)
        })
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in &moves {
            let mut child = self.scratch();
            child.make_move_unchecked(mv);
            nodes += child.perft(depth - 1);
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Color;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        assert_eq!(Position::starting().legal_moves().len(), 20);
    }

    #[test]
    fn test_slider_stops_at_first_blocker() {
        let position = Position::from_fen("4k3/8/8/3p4/8/8/8/R2BK3 w - - 0 1").unwrap();
        let rook = position.piece_at(Square::A1).unwrap();
        let targets: Vec<String> = rook
            .pseudo_legal_moves(&position)
            .iter()
            .map(|mv| mv.to().to_string())
            .collect();
        assert!(targets.contains(&"c1".to_string()));
        assert!(!targets.contains(&"d1".to_string()));
        assert!(targets.contains(&"a8".to_string()));

        let bishop = position.piece_at(Square::D1).unwrap();
        let captures: Vec<Move> = bishop
            .pseudo_legal_moves(&position)
            .into_iter()
            .filter(|mv| mv.is_capture())
            .collect();
        assert!(captures.is_empty());
    }

    #[test]
    fn test_pawn_promotion_fans_out() {
        let position = Position::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let pawn = position.piece_at(sq("a7")).unwrap();
        let moves = pawn.pseudo_legal_moves(&position);
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.iter().filter(|mv| mv.is_capture()).count(), 4);
        assert!(moves.iter().all(|mv| mv.is_promotion()));
    }

    #[test]
    fn test_pinned_piece_cannot_leave_line() {
        let position = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        let knight_moves = position
            .legal_moves()
            .iter()
            .filter(|mv| mv.from() == sq("e2"))
            .count();
        assert_eq!(knight_moves, 0);
    }

    #[test]
    fn test_legal_moves_never_leave_king_in_check() {
        let position = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        for mv in &position.legal_moves() {
            let next = position.with_move(mv).unwrap();
            assert!(!next.is_king_in_check(Color::White), "{mv} leaves king in check");
        }
    }

    #[test]
    fn test_infer_move() {
        let position = Position::starting();
        let mv = position.try_to_infer_move(sq("e2"), sq("e4"), None).unwrap();
        assert!(mv.is_double_pawn_push());

        // Promotion argument is ignored for ordinary moves.
        assert!(position
            .try_to_infer_move(sq("g1"), sq("f3"), Some(PieceKind::Queen))
            .is_some());
        assert!(position.try_to_infer_move(sq("e2"), sq("e5"), None).is_none());
    }

    #[test]
    fn test_infer_promotion_needs_kind() {
        let position = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert!(position.try_to_infer_move(sq("a7"), sq("a8"), None).is_none());
        let mv = position
            .try_to_infer_move(sq("a7"), sq("a8"), Some(PieceKind::Rook))
            .unwrap();
        assert_eq!(mv.promotion(), Some(PieceKind::Rook));
    }
}
