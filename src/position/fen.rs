use std::fmt;
use std::str::FromStr;

use super::error::{FenError, MoveError};
use super::{CastlingRights, Color, Move, Piece, PieceKind, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are required. The resulting history holds only the
    /// parsed position's signature.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Self::parse_fen(fen).map_err(|err| {
            log::debug!("rejected FEN '{fen}': {err}");
            err
        })
    }

    fn parse_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut position = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|run| (1..=8).contains(run)) {
                    file += run as usize;
                    continue;
                }
                if file >= 8 {
                    return Err(FenError::BadRankLength {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                let square = Square::new(file, row).ok_or(FenError::BadRankLength {
                    rank: rank_idx,
                    files: file + 1,
                })?;
                let piece =
                    Piece::from_fen_char(c, square).ok_or(FenError::InvalidPiece { char: c })?;
                position.placement.put(square, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        for color in Color::BOTH {
            let found = position
                .pieces(color)
                .filter(|piece| piece.kind() == PieceKind::King)
                .count();
            if found != 1 {
                return Err(FenError::KingCount { color, found });
            }
        }

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling =
            CastlingRights::from_fen(parts[2]).ok_or_else(|| FenError::InvalidCastling {
                found: parts[2].to_string(),
            })?;

        position.en_passant = match parts[3] {
            "-" => None,
            field => {
                let target = field
                    .parse::<Square>()
                    .ok()
                    .filter(|sq| sq.row() == 2 || sq.row() == 5)
                    .ok_or_else(|| FenError::InvalidEnPassant {
                        found: field.to_string(),
                    })?;
                Some(target)
            }
        };

        position.halfmove_clock =
            parts[4]
                .parse()
                .map_err(|_| FenError::InvalidHalfmoveClock {
                    found: parts[4].to_string(),
                })?;

        position.fullmove_number = parts[5]
            .parse()
            .ok()
            .filter(|&n: &u32| n >= 1)
            .ok_or_else(|| FenError::InvalidFullmoveNumber {
                found: parts[5].to_string(),
            })?;

        position.reset_history();
        Ok(position)
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in (0..8).rev() {
            let mut rank = String::new();
            let mut empty = 0;
            for sq in (0..8).filter_map(|file| Square::new(file, row)) {
                if let Some(piece) = self.piece_at(sq) {
                    if empty > 0 {
                        rank.push_str(&empty.to_string());
                        empty = 0;
                    }
                    rank.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            rows.push(rank);
        }

        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.castling.to_fen(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q") against
    /// the legal moves of this position.
    ///
    /// # Example
    /// ```
    /// use chess_rules::Position;
    ///
    /// let position = Position::starting();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert!(mv.is_double_pawn_push());
    /// ```
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveError> {
        let len = notation.chars().count();
        if !(4..=5).contains(&len) || !notation.is_ascii() {
            return Err(MoveError::InvalidLength { len });
        }

        let invalid_square = || MoveError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match notation[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if !matches!(kind, PieceKind::Pawn | PieceKind::King) => Some(kind),
                _ => return Err(MoveError::InvalidPromotion { char: c }),
            },
        };

        self.try_to_infer_move(from, to, promotion)
            .filter(|mv| mv.promotion() == promotion)
            .ok_or_else(|| MoveError::NoMatch {
                notation: notation.to_string(),
            })
    }

    /// Parse a coordinate-notation move and apply it in one call.
    pub fn apply_coordinate_move(&mut self, notation: &str) -> Result<Move, MoveError> {
        let mv = self.parse_move(notation)?;
        self.apply_move(&mv)?;
        Ok(mv)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}
