use super::placement::Placement;
use super::types::{CastlingRights, Color, Piece, PieceKind, Square};
use crate::zobrist;

/// A complete chess position plus the signature history needed for
/// repetition detection.
///
/// Cloning is a deep copy: the placement is a fixed array of piece values, so
/// no two positions ever alias each other's pieces.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) placement: Placement,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<u64>,
}

impl Position {
    /// The standard initial position.
    pub fn starting() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in back_rank.into_iter().enumerate() {
            for color in Color::BOTH {
                position.place(file, color.back_rank(), kind, color);
                position.place(file, color.pawn_start_row(), PieceKind::Pawn, color);
            }
        }
        position.castling = CastlingRights::all();
        position.reset_history();
        position
    }

    /// An empty board, White to move, no rights, no history.
    pub(crate) fn empty() -> Self {
        Position {
            placement: Placement::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    fn place(&mut self, file: usize, row: usize, kind: PieceKind, color: Color) {
        if let Some(sq) = Square::new(file, row) {
            self.placement.put(sq, Piece::new(kind, color, sq));
        }
    }

    /// Restart the history with the current signature as its only entry.
    pub(crate) fn reset_history(&mut self) {
        self.history.clear();
        let signature = self.signature();
        self.history.push(signature);
    }

    /// Copy for move simulation. Carries no history, so repetition queries on
    /// it are meaningless.
    #[inline]
    pub(crate) fn scratch(&self) -> Position {
        Position {
            placement: self.placement,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            history: Vec::new(),
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Signatures of every position reached so far, oldest first. The last
    /// entry is the current position.
    pub fn history(&self) -> &[u64] {
        &self.history
    }

    /// Zobrist signature over placement, side to move, castling rights and
    /// en passant target.
    pub fn signature(&self) -> u64 {
        zobrist::signature(
            &self.placement,
            self.side_to_move,
            self.castling,
            self.en_passant,
        )
    }

    /// How many times the current signature appears in the history.
    pub fn repetition_count(&self) -> usize {
        let current = self.signature();
        self.history.iter().filter(|&&sig| sig == current).count()
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.placement.piece_at(sq)
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.placement.piece_at(sq).map(Piece::color)
    }

    pub fn kind_at(&self, sq: Square) -> Option<PieceKind> {
        self.placement.piece_at(sq).map(Piece::kind)
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.placement.is_empty(sq)
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.placement.pieces_of(color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.placement.king_square(color)
    }

    pub fn is_square_attacked(&self, sq: Square, attacker: Color) -> bool {
        self.placement.is_square_attacked(sq, attacker)
    }

    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.placement.is_king_in_check(color)
    }

    /// Is the side to move in check?
    pub fn is_check(&self) -> bool {
        self.is_king_in_check(self.side_to_move)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

/// Positions compare by their state, not by how they were reached.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.placement == other.placement
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Position {}
