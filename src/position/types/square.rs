//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::position::error::SquareError;

/// A square on the chess board, stored as a linear index (a1=0, b1=1, ..., h8=63).
///
/// The index is always in `0..64`; `file()` and `row()` are derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    /// Create a square from a file (0 = a) and row (0 = rank 1).
    #[must_use]
    pub const fn new(file: usize, row: usize) -> Option<Self> {
        if file < 8 && row < 8 {
            Some(Square((row * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from a linear index (0-63).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// File (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 % 8) as usize
    }

    /// Row (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Linear index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a file/row delta, returning `None` when leaving the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, file_delta: isize, row_delta: isize) -> Option<Self> {
        let file = self.file() as isize + file_delta;
        let row = self.row() as isize + row_delta;
        if file < 0 || file > 7 || row < 0 || row > 7 {
            None
        } else {
            Some(Square((row * 8 + file) as u8))
        }
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Light squares are those where file + row is odd (h1 is light).
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.file() + self.row()) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.row() + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((file, row): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        Ok(Square((row * 8 + file) as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => (bytes[1] - b'1') as usize,
            _ => return Err(invalid()),
        };
        Ok(Square((row * 8 + file) as u8))
    }
}
