//! Chess rules engine.
//!
//! Maintains a position, enumerates legal moves, applies moves, detects
//! terminal game states and converts positions to and from FEN.
//!
//! # Example
//! ```
//! use chess_rules::position::{GameState, Position};
//!
//! let mut position = Position::starting();
//! assert_eq!(position.legal_moves().len(), 20);
//!
//! for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     position.apply_coordinate_move(uci).unwrap();
//! }
//! assert_eq!(position.game_state(), GameState::BlackWin);
//! ```

pub mod pgn;
pub mod position;
mod zobrist;

pub use pgn::{Game, PgnError};
pub use position::{Color, GameState, Move, Piece, PieceKind, Position, Square};
