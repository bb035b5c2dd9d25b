//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::position::{Color, PieceKind, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::E1, Color::White, PieceKind::King)
//!     .piece(Square::H1, Color::White, PieceKind::Rook)
//!     .piece(Square::E8, Color::Black, PieceKind::King)
//!     .castle_kingside(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K2R w K - 0 1");
//! ```

use super::error::FenError;
use super::{CastlingRights, Color, Piece, PieceKind, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, PieceKind)>,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder seeded with the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::starting();
        let mut builder = Self::new();
        builder.pieces = start
            .placement()
            .pieces()
            .map(|piece| (piece.square(), piece.color(), piece.kind()))
            .collect();
        builder.castling = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling.set(color, true);
        self
    }

    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling.set(color, false);
        self
    }

    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant = Some(target);
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position.
    ///
    /// Fails with [`FenError::KingCount`] unless each side has exactly one
    /// king. The history starts at the built position.
    pub fn build(self) -> Result<Position, FenError> {
        for color in Color::BOTH {
            let found = self
                .pieces
                .iter()
                .filter(|&&(_, c, kind)| c == color && kind == PieceKind::King)
                .count();
            if found != 1 {
                return Err(FenError::KingCount { color, found });
            }
        }

        let mut position = Position::empty();
        for (square, color, kind) in self.pieces {
            position.placement.put(square, Piece::new(kind, color, square));
        }
        position.side_to_move = self.side_to_move;
        position.castling = self.castling;
        position.en_passant = self.en_passant;
        position.halfmove_clock = self.halfmove_clock;
        position.fullmove_number = self.fullmove_number.max(1);
        position.reset_history();
        Ok(position)
    }
}
