//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::position::prelude::*;
//!
//! let position = Position::starting();
//! assert_eq!(position.side_to_move(), Color::White);
//! ```

pub use super::{
    CastlingRights, Color, DrawReason, FenError, GameState, Move, MoveError, MoveList, Piece,
    PieceKind, Position, PositionBuilder, SanError, Square,
};
