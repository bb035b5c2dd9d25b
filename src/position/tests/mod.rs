//! Position module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `castling.rs` - Castling rights and legality
//! - `edge_cases.rs` - Special positions and moves
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::position::{Position, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn play(position: &mut Position, moves: &[&str]) {
    for notation in moves {
        position
            .apply_coordinate_move(notation)
            .unwrap_or_else(|err| panic!("{notation}: {err}"));
    }
}
