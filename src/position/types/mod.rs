//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - pieces and the side they belong to
//! - `Square` - board coordinate (linear index 0-63)
//! - `Move`, `SpecialMove` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter, SpecialMove};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_KINDS;
