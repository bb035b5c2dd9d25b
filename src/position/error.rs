//! Error types for position operations.

use std::fmt;

use super::types::{Color, Move};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string must have exactly six whitespace-separated fields
    WrongFieldCount { found: usize },
    /// Piece placement must describe exactly eight ranks
    WrongRankCount { found: usize },
    /// A rank does not cover exactly eight files
    BadRankLength { rank: usize, files: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling field
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Fullmove number is not a positive integer
    InvalidFullmoveNumber { found: String },
    /// Each side needs exactly one king
    KingCount { color: Color, found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::BadRankLength { rank, files } => {
                write!(f, "Rank {rank} covers {files} files, expected 8")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid fullmove number '{found}'")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move application and coordinate-notation parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Move is not in the legal move set of the position
    Illegal { mv: Move },
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// No legal move matches the given endpoints
    NoMatch { notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Illegal { mv } => write!(f, "Illegal move {mv}"),
            MoveError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveError::NoMatch { notation } => {
                write!(f, "No legal move matches '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for SAN (Standard Algebraic Notation) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanError {
    /// Empty SAN string
    Empty,
    /// Invalid piece character
    InvalidPiece { char: char },
    /// Invalid square in SAN
    InvalidSquare { notation: String },
    /// Ambiguous move (multiple pieces can reach the target)
    AmbiguousMove { san: String },
    /// No matching legal move found
    NoMatchingMove { san: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanError::Empty => write!(f, "Empty SAN string"),
            SanError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in SAN")
            }
            SanError::InvalidSquare { notation } => {
                write!(f, "Invalid square in SAN '{notation}'")
            }
            SanError::AmbiguousMove { san } => {
                write!(f, "Ambiguous move '{san}'")
            }
            SanError::NoMatchingMove { san } => {
                write!(f, "No legal move matches '{san}'")
            }
            SanError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for SanError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Square;

    #[test]
    fn test_fen_error_field_count() {
        let err = FenError::WrongFieldCount { found: 4 };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_king_count() {
        let err = FenError::KingCount {
            color: Color::Black,
            found: 0,
        };
        assert_eq!(err.to_string(), "Black must have exactly one king, found 0");
    }

    #[test]
    fn test_move_error_illegal() {
        let err = MoveError::Illegal {
            mv: Move::quiet(Square::E1, Square::E8),
        };
        assert!(err.to_string().contains("e1e8"));
    }

    #[test]
    fn test_move_error_invalid_length() {
        let err = MoveError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_san_error_ambiguous() {
        let err = SanError::AmbiguousMove {
            san: "Nd2".to_string(),
        };
        assert!(err.to_string().contains("Nd2"));
    }
}
