//! Standard Algebraic Notation (SAN) support.
//!
//! SAN is the notation of scoresheets and PGN files: "e4", "Nf3", "Bxc6+",
//! "O-O", "e8=Q#".
//!
//! # Examples
//! ```
//! use chess_rules::Position;
//!
//! let position = Position::starting();
//! let mv = position.parse_san("Nf3").unwrap();
//! assert_eq!(position.move_to_san(&mv), "Nf3");
//! ```

use super::error::SanError;
use super::{Move, PieceKind, Position, SpecialMove, Square};

/// Disambiguation and target pulled out of a SAN token.
struct SanParts {
    kind: PieceKind,
    from_file: Option<usize>,
    from_row: Option<usize>,
    to: Square,
    promotion: Option<PieceKind>,
}

impl Position {
    /// Format a legal move in Standard Algebraic Notation, with a `+` or `#`
    /// suffix when it gives check or mate.
    #[must_use]
    pub fn move_to_san(&self, mv: &Move) -> String {
        let mut san = match mv.special() {
            SpecialMove::KingSideCastle => "O-O".to_string(),
            SpecialMove::QueenSideCastle => "O-O-O".to_string(),
            _ => self.describe_move(mv),
        };

        let mut after = self.scratch();
        after.make_move_unchecked(mv);
        if after.is_check() {
            san.push(if after.legal_moves().is_empty() { '#' } else { '+' });
        }
        san
    }

    fn describe_move(&self, mv: &Move) -> String {
        let mut san = String::new();
        let kind = self.kind_at(mv.from()).unwrap_or(PieceKind::Pawn);

        if kind == PieceKind::Pawn {
            if mv.is_capture() {
                san.push(file_char(mv.from()));
            }
        } else {
            san.push(kind.to_char().to_ascii_uppercase());
            let (needs_file, needs_row) = self.needs_disambiguation(mv, kind);
            if needs_file {
                san.push(file_char(mv.from()));
            }
            if needs_row {
                san.push(row_char(mv.from()));
            }
        }

        if mv.is_capture() {
            san.push('x');
        }
        san.push_str(&mv.to().to_string());

        if let Some(promo) = mv.promotion() {
            san.push('=');
            san.push(promo.to_char().to_ascii_uppercase());
        }
        san
    }

    /// Which parts of the origin square SAN must spell out to tell this move
    /// apart from same-kind moves to the same square. Returns (file, row).
    fn needs_disambiguation(&self, mv: &Move, kind: PieceKind) -> (bool, bool) {
        let rivals: Vec<Square> = self
            .legal_moves()
            .iter()
            .filter(|other| {
                other.to() == mv.to()
                    && other.from() != mv.from()
                    && self.kind_at(other.from()) == Some(kind)
            })
            .map(|other| other.from())
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }
        let shares_file = rivals.iter().any(|sq| sq.file() == mv.from().file());
        let shares_row = rivals.iter().any(|sq| sq.row() == mv.from().row());
        match (shares_file, shares_row) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }

    /// Parse a SAN token against the legal moves of this position.
    ///
    /// Check and annotation suffixes (`+`, `#`, `!`, `?`) are ignored.
    /// Castling is accepted as `O-O`/`O-O-O` or with zeros.
    pub fn parse_san(&self, san: &str) -> Result<Move, SanError> {
        let token = san.trim().trim_end_matches(['+', '#', '!', '?']);
        if token.is_empty() {
            return Err(SanError::Empty);
        }

        let matching: Vec<Move> = match token {
            "O-O" | "0-0" => self
                .legal_moves()
                .into_iter()
                .filter(|mv| mv.special() == SpecialMove::KingSideCastle)
                .collect(),
            "O-O-O" | "0-0-0" => self
                .legal_moves()
                .into_iter()
                .filter(|mv| mv.special() == SpecialMove::QueenSideCastle)
                .collect(),
            _ => {
                let parts = split_san(token)?;
                self.legal_moves()
                    .into_iter()
                    .filter(|mv| {
                        mv.to() == parts.to
                            && !mv.is_castling()
                            && self.kind_at(mv.from()) == Some(parts.kind)
                            && mv.promotion() == parts.promotion
                            && parts.from_file.map_or(true, |f| mv.from().file() == f)
                            && parts.from_row.map_or(true, |r| mv.from().row() == r)
                    })
                    .collect()
            }
        };

        match matching.as_slice() {
            [mv] => Ok(*mv),
            [] => Err(SanError::NoMatchingMove {
                san: san.to_string(),
            }),
            _ => Err(SanError::AmbiguousMove {
                san: san.to_string(),
            }),
        }
    }

    /// Parse a SAN move and apply it in one call.
    pub fn apply_san(&mut self, san: &str) -> Result<Move, SanError> {
        let mv = self.parse_san(san)?;
        self.commit_move(&mv);
        Ok(mv)
    }
}

/// Break a non-castling SAN token into its components:
/// `[piece][file][row][x]<square>[=promotion]`.
fn split_san(token: &str) -> Result<SanParts, SanError> {
    let mut chars: Vec<char> = token.chars().collect();

    let kind = match chars.first() {
        Some(&c) if c.is_ascii_uppercase() => {
            let kind = PieceKind::from_char(c)
                .filter(|&kind| kind != PieceKind::Pawn)
                .ok_or(SanError::InvalidPiece { char: c })?;
            chars.remove(0);
            kind
        }
        _ => PieceKind::Pawn,
    };

    let mut promotion = None;
    if let Some(&last) = chars.last() {
        if last.is_ascii_alphabetic() && (last.is_ascii_uppercase() || chars.len() > 2) {
            let promo = PieceKind::from_char(last)
                .filter(|kind| !matches!(kind, PieceKind::Pawn | PieceKind::King))
                .ok_or(SanError::InvalidPromotion { char: last })?;
            if kind != PieceKind::Pawn {
                return Err(SanError::InvalidPromotion { char: last });
            }
            promotion = Some(promo);
            chars.pop();
            if chars.last() == Some(&'=') {
                chars.pop();
            }
        }
    }

    if chars.len() < 2 {
        return Err(SanError::InvalidSquare {
            notation: token.to_string(),
        });
    }
    let target: String = chars[chars.len() - 2..].iter().collect();
    let to: Square = target
        .parse()
        .map_err(|_| SanError::InvalidSquare {
            notation: target.clone(),
        })?;

    let mut from_file = None;
    let mut from_row = None;
    for &c in &chars[..chars.len() - 2] {
        match c {
            'x' => {}
            'a'..='h' => from_file = Some(c as usize - 'a' as usize),
            '1'..='8' => from_row = Some(c as usize - '1' as usize),
            _ => {
                return Err(SanError::InvalidSquare {
                    notation: token.to_string(),
                })
            }
        }
    }

    Ok(SanParts {
        kind,
        from_file,
        from_row,
        to,
        promotion,
    })
}

fn file_char(sq: Square) -> char {
    (b'a' + sq.file() as u8) as char
}

fn row_char(sq: Square) -> char {
    (b'1' + sq.row() as u8) as char
}
