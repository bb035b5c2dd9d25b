//! Chess positions and the rules that act on them.
//!
//! A position is a 64-slot array of optional pieces plus the side to move,
//! castling rights, en passant target, move counters and the signature
//! history used for repetition detection.
//!
//! # Example
//! ```
//! use chess_rules::position::{GameState, Position};
//!
//! let mut position = Position::starting();
//! assert_eq!(position.legal_moves().len(), 20);
//! position.apply_coordinate_move("e2e4").unwrap();
//! assert_eq!(position.game_state(), GameState::Playing);
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod make_move;
mod movegen;
mod placement;
pub mod prelude;
mod rules;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, SanError, SquareError};
pub use placement::Placement;
pub use rules::{DrawReason, DrawRules, GameState};
pub use state::Position;
pub use types::{
    CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, PieceKind, SpecialMove,
    Square,
};
