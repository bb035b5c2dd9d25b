//! Precomputed target tables for leaper pieces (knights, kings, pawns) and
//! ray directions for sliders.

use once_cell::sync::Lazy;

use super::types::{Color, Square};

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// (file, row) steps along ranks and files
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// (file, row) steps along diagonals
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

fn leaper_table(deltas: &[(isize, isize)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    for sq in Square::all() {
        table[sq.index()] = deltas
            .iter()
            .filter_map(|&(df, dr)| sq.offset(df, dr))
            .fold(0u64, |mask, target| mask | 1u64 << target.index());
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// `PAWN_ATTACKS[color][sq]`: squares a pawn of `color` standing on `sq` attacks.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    let mut attacks = [[0u64; 64]; 2];
    for color in Color::BOTH {
        let dir = color.pawn_direction();
        attacks[color.index()] = leaper_table(&[(-1, dir), (1, dir)]);
    }
    attacks
});

/// Iterate the squares set in a 64-bit mask, lowest index first.
pub(crate) fn squares_in(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let idx = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Square::from_index(idx)
    })
}
