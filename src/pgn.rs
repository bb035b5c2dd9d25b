//! Game records in Portable Game Notation.
//!
//! A [`Game`] keeps the starting position, the moves played from it and
//! their SAN spelling, and can be written to or read from PGN text.
//!
//! # Example
//! ```
//! use chess_rules::{Game, GameState};
//!
//! let mut game = Game::default();
//! for san in ["f3", "e5", "g4", "Qh4"] {
//!     game.play_san(san).unwrap();
//! }
//! assert_eq!(game.result(), GameState::BlackWin);
//! assert!(game.to_pgn().ends_with("1. f3 e5 2. g4 Qh4# 0-1\n"));
//! ```

use std::fmt;

use crate::position::{Color, FenError, GameState, Move, MoveError, Position, SanError};

const MAX_LINE: usize = 80;

/// Error type for PGN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PgnError {
    /// A tag pair line is not of the form `[Name "Value"]`
    MalformedTag { line: String },
    /// The `FEN` tag does not hold a valid position
    InvalidFen(FenError),
    /// A movetext token is not a legal move in the position it is played from
    InvalidMove {
        ply: usize,
        token: String,
        source: SanError,
    },
}

impl fmt::Display for PgnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PgnError::MalformedTag { line } => write!(f, "Malformed tag pair '{line}'"),
            PgnError::InvalidFen(err) => write!(f, "Invalid FEN tag: {err}"),
            PgnError::InvalidMove { ply, token, source } => {
                write!(f, "Invalid move '{token}' at ply {ply}: {source}")
            }
        }
    }
}

impl std::error::Error for PgnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PgnError::MalformedTag { .. } => None,
            PgnError::InvalidFen(err) => Some(err),
            PgnError::InvalidMove { source, .. } => Some(source),
        }
    }
}

impl From<FenError> for PgnError {
    fn from(err: FenError) -> Self {
        PgnError::InvalidFen(err)
    }
}

/// A game: a starting position plus the moves played from it.
#[derive(Clone, Debug)]
pub struct Game {
    start: Position,
    current: Position,
    tags: Vec<(String, String)>,
    moves: Vec<Move>,
    san: Vec<String>,
    declared_result: Option<GameState>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Position::starting())
    }
}

impl Game {
    pub fn new(start: Position) -> Self {
        Game {
            current: start.clone(),
            start,
            tags: Vec::new(),
            moves: Vec::new(),
            san: Vec::new(),
            declared_result: None,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Game::new(Position::from_fen(fen)?))
    }

    /// Set a tag pair, replacing an earlier value of the same name.
    ///
    /// `FEN`, `SetUp` and `Result` are derived from the game when writing
    /// PGN, so values given for them here are not emitted.
    pub fn set_tag(&mut self, name: &str, value: &str) {
        match self.tags.iter_mut().find(|(n, _)| n == name) {
            Some(tag) => tag.1 = value.to_string(),
            None => self.tags.push((name.to_string(), value.to_string())),
        }
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Record an outcome the board does not show, such as a resignation or
    /// an agreed draw. Ignored once the position itself is decided.
    pub fn set_result(&mut self, result: GameState) {
        self.declared_result = Some(result);
    }

    pub fn start(&self) -> &Position {
        &self.start
    }

    pub fn position(&self) -> &Position {
        &self.current
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// SAN of each move, with check and mate suffixes.
    pub fn san_moves(&self) -> &[String] {
        &self.san
    }

    /// Every position of the game, the start included.
    pub fn positions(&self) -> Vec<Position> {
        let mut position = self.start.clone();
        let mut positions = Vec::with_capacity(self.moves.len() + 1);
        positions.push(position.clone());
        for mv in &self.moves {
            position.commit_move(mv);
            positions.push(position.clone());
        }
        positions
    }

    /// Play a legal move, recording its SAN.
    pub fn play(&mut self, mv: &Move) -> Result<(), MoveError> {
        if !self.current.legal_moves().contains(mv) {
            return Err(MoveError::Illegal { mv: *mv });
        }
        let san = self.current.move_to_san(mv);
        self.current.commit_move(mv);
        self.moves.push(*mv);
        self.san.push(san);
        Ok(())
    }

    /// Parse a SAN move in the current position and play it.
    pub fn play_san(&mut self, san: &str) -> Result<Move, SanError> {
        let mv = self.current.parse_san(san)?;
        let spelled = self.current.move_to_san(&mv);
        self.current.commit_move(&mv);
        self.moves.push(mv);
        self.san.push(spelled);
        Ok(mv)
    }

    /// The board's verdict when the game is decided on the board, otherwise
    /// any declared result, otherwise `Playing`.
    pub fn result(&self) -> GameState {
        match self.current.game_state() {
            GameState::Playing => self.declared_result.unwrap_or(GameState::Playing),
            decided => decided,
        }
    }

    /// Write the game as PGN: tag pairs, a blank line, then numbered
    /// movetext ending in the result token.
    pub fn to_pgn(&self) -> String {
        let result = result_token(self.result());
        let mut out = String::new();

        for (name, value) in &self.tags {
            if matches!(name.as_str(), "FEN" | "SetUp" | "Result") {
                continue;
            }
            out.push_str(&format!("[{name} \"{}\"]\n", escape(value)));
        }
        if self.start != Position::starting() {
            out.push_str("[SetUp \"1\"]\n");
            out.push_str(&format!("[FEN \"{}\"]\n", self.start.to_fen()));
        }
        out.push_str(&format!("[Result \"{result}\"]\n\n"));

        let mut tokens = Vec::with_capacity(self.san.len() * 3 / 2 + 1);
        let mut number = self.start.fullmove_number();
        let mut white_to_move = self.start.side_to_move() == Color::White;
        for (ply, san) in self.san.iter().enumerate() {
            if white_to_move {
                tokens.push(format!("{number}. {san}"));
            } else if ply == 0 {
                tokens.push(format!("{number}... {san}"));
            } else {
                tokens.push(san.clone());
            }
            if !white_to_move {
                number = number.saturating_add(1);
            }
            white_to_move = !white_to_move;
        }
        tokens.push(result.to_string());

        let mut line = String::new();
        for token in tokens {
            if !line.is_empty() && line.len() + 1 + token.len() > MAX_LINE {
                out.push_str(&line);
                out.push('\n');
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&token);
        }
        out.push_str(&line);
        out.push('\n');
        out
    }

    /// Read a single game from PGN text.
    ///
    /// Honours the `FEN` tag. Move numbers, comments, variations, NAGs and
    /// the result token are skipped; the remaining tokens are replayed as
    /// SAN moves.
    pub fn from_pgn(text: &str) -> Result<Self, PgnError> {
        let mut tags = Vec::new();
        let mut movetext = String::new();

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with('[') {
                tags.push(parse_tag(trimmed)?);
            } else if !trimmed.starts_with('%') {
                movetext.push_str(line);
                movetext.push('\n');
            }
        }

        let start = match tags.iter().find(|(name, _)| name == "FEN") {
            Some((_, fen)) => Position::from_fen(fen)?,
            None => Position::starting(),
        };
        let mut game = Game::new(start);
        for (name, value) in &tags {
            game.set_tag(name, value);
        }
        if let Some(result) = game.tag("Result").and_then(parse_result) {
            game.declared_result = Some(result);
        }

        for token in movetext_tokens(&movetext) {
            if let Some(result) = parse_result(&token) {
                game.declared_result = Some(result);
                continue;
            }
            let ply = game.moves.len() + 1;
            game.play_san(&token).map_err(|source| {
                log::debug!("PGN move '{token}' rejected at ply {ply}");
                PgnError::InvalidMove {
                    ply,
                    token: token.clone(),
                    source,
                }
            })?;
        }

        Ok(game)
    }
}

fn result_token(state: GameState) -> &'static str {
    match state {
        GameState::WhiteWin => "1-0",
        GameState::BlackWin => "0-1",
        GameState::Draw => "1/2-1/2",
        GameState::Playing => "*",
    }
}

fn parse_result(token: &str) -> Option<GameState> {
    match token {
        "1-0" => Some(GameState::WhiteWin),
        "0-1" => Some(GameState::BlackWin),
        "1/2-1/2" | "½-½" => Some(GameState::Draw),
        "*" => Some(GameState::Playing),
        _ => None,
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Parse `[Name "Value"]`.
fn parse_tag(line: &str) -> Result<(String, String), PgnError> {
    let malformed = || PgnError::MalformedTag {
        line: line.to_string(),
    };
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(malformed)?
        .trim();
    let (name, rest) = inner.split_once(char::is_whitespace).ok_or_else(malformed)?;
    let quoted = rest
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(malformed)?;
    if name.is_empty() {
        return Err(malformed());
    }
    let value = quoted.replace("\\\"", "\"").replace("\\\\", "\\");
    Ok((name.to_string(), value))
}

/// Split movetext into move and result tokens, dropping comments,
/// variations, NAGs and move numbers.
fn movetext_tokens(movetext: &str) -> Vec<String> {
    let mut cleaned = String::with_capacity(movetext.len());
    let mut brace_comment = false;
    let mut line_comment = false;
    let mut variation_depth = 0usize;

    for c in movetext.chars() {
        if line_comment {
            if c == '\n' {
                line_comment = false;
                cleaned.push(' ');
            }
            continue;
        }
        if brace_comment {
            if c == '}' {
                brace_comment = false;
            }
            continue;
        }
        match c {
            '{' => brace_comment = true,
            ';' => line_comment = true,
            '(' => variation_depth += 1,
            ')' => variation_depth = variation_depth.saturating_sub(1),
            _ if variation_depth > 0 => {}
            _ => cleaned.push(c),
        }
    }

    cleaned
        .split_whitespace()
        .filter(|token| !token.starts_with('$'))
        .filter(|token| !token.chars().all(|c| matches!(c, '!' | '?')))
        .filter_map(|token| {
            let is_numbered = token.starts_with(|c: char| c.is_ascii_digit()) && token.contains('.');
            let rest = if is_numbered {
                token.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.')
            } else {
                token
            };
            (!rest.is_empty()).then(|| rest.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movetext_tokens_skip_noise() {
        let tokens =
            movetext_tokens("1. e4 {best by test} e5 2.Nf3 (2. f4 exf4) Nc6 $1 !? ; note\n3... a6 *");
        assert_eq!(tokens, vec!["e4", "e5", "Nf3", "Nc6", "a6", "*"]);
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!(
            parse_tag(r#"[White "Byrne, \"Donald\""]"#).unwrap(),
            ("White".to_string(), "Byrne, \"Donald\"".to_string())
        );
        assert!(matches!(
            parse_tag("[White Byrne]"),
            Err(PgnError::MalformedTag { .. })
        ));
        assert!(parse_tag("[White \"Byrne\"").is_err());
    }

    #[test]
    fn test_to_pgn_from_custom_start() {
        let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 b Q - 0 12").unwrap();
        game.set_tag("Event", "Endgame drill");
        game.play_san("Kd7").unwrap();
        game.play_san("O-O-O+").unwrap();
        let pgn = game.to_pgn();
        assert_eq!(
            pgn,
            "[Event \"Endgame drill\"]\n\
             [SetUp \"1\"]\n\
             [FEN \"4k3/8/8/8/8/8/8/R3K3 b Q - 0 12\"]\n\
             [Result \"*\"]\n\
             \n\
             12... Kd7 13. O-O-O+ *\n"
        );
    }

    #[test]
    fn test_declared_result_round_trip() {
        let mut game = Game::default();
        game.play_san("e4").unwrap();
        game.set_result(GameState::Draw);
        let text = game.to_pgn();
        assert!(text.contains("[Result \"1/2-1/2\"]"));
        assert!(text.ends_with("1. e4 1/2-1/2\n"));

        let reread = Game::from_pgn(&text).unwrap();
        assert_eq!(reread.result(), GameState::Draw);
        assert_eq!(reread.san_moves(), ["e4"]);
    }

    #[test]
    fn test_illegal_token_reports_ply() {
        let err = Game::from_pgn("1. e4 e5 2. Ke3 *").unwrap_err();
        assert!(matches!(err, PgnError::InvalidMove { ply: 3, .. }));
    }

    #[test]
    fn test_play_rejects_illegal_move() {
        let mut game = Game::default();
        let mv = Move::quiet(
            "e1".parse().unwrap(),
            "e2".parse().unwrap(),
        );
        assert!(game.play(&mv).is_err());
        assert!(game.moves().is_empty());
    }
}
