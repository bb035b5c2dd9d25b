//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;

/// Move shapes that need extra work beyond relocating one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpecialMove {
    #[default]
    None,
    DoublePawnPush,
    KingSideCastle,
    QueenSideCastle,
}

/// An immutable description of one transition between positions.
///
/// Castling is a single king move; the rook relocation is implied by the tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    is_capture: bool,
    is_en_passant: bool,
    special: SpecialMove,
}

impl Move {
    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::with_flags(from, to, None, false, false, SpecialMove::None)
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::with_flags(from, to, None, true, false, SpecialMove::None)
    }

    /// Create a double pawn push move
    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move::with_flags(from, to, None, false, false, SpecialMove::DoublePawnPush)
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::with_flags(from, to, None, true, true, SpecialMove::None)
    }

    /// Create a kingside castle move
    #[inline]
    #[must_use]
    pub const fn castle_kingside(from: Square, to: Square) -> Self {
        Move::with_flags(from, to, None, false, false, SpecialMove::KingSideCastle)
    }

    /// Create a queenside castle move
    #[inline]
    #[must_use]
    pub const fn castle_queenside(from: Square, to: Square) -> Self {
        Move::with_flags(from, to, None, false, false, SpecialMove::QueenSideCastle)
    }

    /// Create a promotion move, capturing or not
    #[inline]
    #[must_use]
    pub const fn promotion_to(from: Square, to: Square, kind: PieceKind, is_capture: bool) -> Self {
        Move::with_flags(from, to, Some(kind), is_capture, false, SpecialMove::None)
    }

    #[inline]
    const fn with_flags(
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        is_capture: bool,
        is_en_passant: bool,
        special: SpecialMove,
    ) -> Self {
        Move {
            from,
            to,
            promotion,
            is_capture,
            is_en_passant,
            special,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.is_capture
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.is_en_passant
    }

    #[inline]
    #[must_use]
    pub const fn special(self) -> SpecialMove {
        self.special
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(
            self.special,
            SpecialMove::KingSideCastle | SpecialMove::QueenSideCastle
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.special, SpecialMove::DoublePawnPush)
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture {
            write!(f, " cap")?;
        }
        match self.special {
            SpecialMove::None => {}
            SpecialMove::DoublePawnPush => write!(f, " double")?,
            SpecialMove::KingSideCastle => write!(f, " O-O")?,
            SpecialMove::QueenSideCastle => write!(f, " O-O-O")?,
        }
        if self.is_en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation: "e2e4", "e7e8q"
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

// No reachable position has more than 218 legal moves. Arbitrary FEN
// placements can exceed this, so the list grows past it.
const MAX_MOVES: usize = 256;

/// List of moves, preallocated for any reachable position.
#[derive(Clone)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    inner: std::vec::IntoIter<Move>,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter {
            inner: self.moves.into_iter(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_move_flags() {
        let ep = Move::en_passant(sq("e5"), sq("d6"));
        assert!(ep.is_capture());
        assert!(ep.is_en_passant());
        assert_eq!(ep.special(), SpecialMove::None);

        let castle = Move::castle_kingside(Square::E1, Square::G1);
        assert!(castle.is_castling());
        assert!(!castle.is_capture());

        let push = Move::double_pawn_push(sq("e2"), sq("e4"));
        assert!(push.is_double_pawn_push());
    }

    #[test]
    fn test_equality_covers_promotion() {
        let queen = Move::promotion_to(sq("a7"), sq("a8"), PieceKind::Queen, false);
        let knight = Move::promotion_to(sq("a7"), sq("a8"), PieceKind::Knight, false);
        assert_ne!(queen, knight);
        assert_eq!(queen.to_string(), "a7a8q");
    }

    #[test]
    fn test_move_list_basics() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        let mv = Move::quiet(sq("g1"), sq("f3"));
        list.push(mv);
        assert_eq!(list.len(), 1);
        assert!(list.contains(&mv));
        assert_eq!(list[0], mv);
        assert_eq!(list.get(1), None);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![mv]);
    }
}
