//! Zobrist hashing for chess positions.
//!
//! The hash is the position signature used for repetition detection: it
//! covers piece placement, side to move, castling rights and the en passant
//! target, but not the move counters.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::position::{CastlingRights, Color, Placement, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_kind][color][square_index]
    piece_keys: [[[u64; 64]; 2]; 6],
    black_to_move_key: u64,
    // castling_keys[color][side] : 0=White, 1=Black; 0=Kingside, 1=Queenside
    castling_keys: [[u64; 2]; 2],
    // en_passant_keys[file_index] (only file matters for EP target)
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed so signatures are reproducible between runs
        let mut rng = StdRng::seed_from_u64(1_234_567_890_u64);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Compute the signature of a position from its repetition-relevant fields.
pub(crate) fn signature(
    placement: &Placement,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
) -> u64 {
    let keys = &*ZOBRIST;
    let mut hash: u64 = 0;

    for piece in placement.pieces() {
        hash ^= keys.piece_keys[piece.kind().index()][piece.color().index()]
            [piece.square().index()];
    }

    if side_to_move == Color::Black {
        hash ^= keys.black_to_move_key;
    }

    for color in Color::BOTH {
        if castling.has(color, true) {
            hash ^= keys.castling_keys[color.index()][0];
        }
        if castling.has(color, false) {
            hash ^= keys.castling_keys[color.index()][1];
        }
    }

    if let Some(ep_square) = en_passant {
        hash ^= keys.en_passant_keys[ep_square.file()];
    }

    hash
}
