//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// FEN order: K, Q, k, q
const FEN_ORDER: [(Color, bool, char); 4] = [
    (Color::White, true, 'K'),
    (Color::White, false, 'Q'),
    (Color::Black, true, 'k'),
    (Color::Black, false, 'q'),
];

/// Castling rights represented as a bitmask of four independent flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Drop every right that depends on a piece standing on `square`.
    ///
    /// Called with both endpoints of every move: a king or rook leaving its
    /// home square, or a rook being captured there, loses the right for good.
    #[inline]
    pub(crate) fn clear_for_square(&mut self, square: Square) {
        self.0 &= !Self::bits_for_square(square);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Parse the FEN castling field ("KQkq", "Kq", "-", ...).
    ///
    /// Letters must appear at most once and in canonical order.
    pub(crate) fn from_fen(field: &str) -> Option<Self> {
        let mut rights = CastlingRights::none();
        if field == "-" {
            return Some(rights);
        }
        let mut next = 0;
        for c in field.chars() {
            let offset = FEN_ORDER[next..]
                .iter()
                .position(|&(_, _, letter)| letter == c)?;
            let (color, kingside, _) = FEN_ORDER[next + offset];
            rights.set(color, kingside);
            next += offset + 1;
        }
        if rights.is_empty() {
            return None;
        }
        Some(rights)
    }

    /// FEN castling field, "-" when no rights remain.
    #[must_use]
    pub fn to_fen(self) -> String {
        let field: String = FEN_ORDER
            .iter()
            .filter(|&&(color, kingside, _)| self.has(color, kingside))
            .map(|&(_, _, letter)| letter)
            .collect();
        if field.is_empty() {
            "-".to_string()
        } else {
            field
        }
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }

    #[inline]
    const fn bits_for_square(square: Square) -> u8 {
        match square.index() {
            0 => CASTLE_WHITE_Q,
            4 => CASTLE_WHITE_K | CASTLE_WHITE_Q,
            7 => CASTLE_WHITE_K,
            56 => CASTLE_BLACK_Q,
            60 => CASTLE_BLACK_K | CASTLE_BLACK_Q,
            63 => CASTLE_BLACK_K,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_field_round_trip() {
        for field in ["KQkq", "KQ", "kq", "Kq", "Q", "-"] {
            let rights = CastlingRights::from_fen(field).unwrap();
            assert_eq!(rights.to_fen(), field);
        }
    }

    #[test]
    fn test_fen_field_rejects_bad_input() {
        for bad in ["KX", "KK", "qK", "", "-K", "--"] {
            assert_eq!(CastlingRights::from_fen(bad), None, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_clear_for_home_squares() {
        let mut rights = CastlingRights::all();
        rights.clear_for_square(Square::H1);
        assert!(!rights.has(Color::White, true));
        assert!(rights.has(Color::White, false));

        rights.clear_for_square(Square::E8);
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));

        rights.clear_for_square(Square::D1);
        assert!(rights.has(Color::White, false));
    }
}
