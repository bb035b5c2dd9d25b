//! Game-state classification: checkmate, stalemate and the draw rules.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, PieceKind, Position};

/// Outcome of a position from the rules' point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    Playing,
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameState::Playing)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::WhiteWin => Some(Color::White),
            GameState::BlackWin => Some(Color::Black),
            GameState::Playing | GameState::Draw => None,
        }
    }
}

/// Why a position counts as drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    Stalemate,
    FiftyMove,
    Repetition,
    InsufficientMaterial,
}

/// Tunable thresholds for the automatic draw rules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawRules {
    /// Halfmove clock value at which the game is drawn (0 disables)
    pub fifty_move_halfmoves: u32,
    /// Occurrences of the same signature that draw the game (0 disables)
    pub repetition_count: usize,
    pub insufficient_material: bool,
}

impl Default for DrawRules {
    fn default() -> Self {
        DrawRules {
            fifty_move_halfmoves: 100,
            repetition_count: 3,
            insufficient_material: true,
        }
    }
}

impl Position {
    /// Classify the position under the standard draw rules.
    pub fn game_state(&self) -> GameState {
        self.game_state_with(&DrawRules::default())
    }

    /// Classify the position. Checkmate and stalemate take precedence over
    /// the other draw rules.
    pub fn game_state_with(&self, rules: &DrawRules) -> GameState {
        if self.legal_moves().is_empty() {
            if self.is_check() {
                log::debug!("checkmate, {} to move", self.side_to_move);
                return match self.side_to_move {
                    Color::White => GameState::BlackWin,
                    Color::Black => GameState::WhiteWin,
                };
            }
            log::debug!("stalemate, {} to move", self.side_to_move);
            return GameState::Draw;
        }

        if let Some(reason) = self.automatic_draw(rules) {
            log::debug!("draw by {reason:?}");
            return GameState::Draw;
        }
        GameState::Playing
    }

    /// The reason the position is drawn under the standard rules, if it is.
    pub fn draw_reason(&self) -> Option<DrawReason> {
        self.draw_reason_with(&DrawRules::default())
    }

    pub fn draw_reason_with(&self, rules: &DrawRules) -> Option<DrawReason> {
        if self.legal_moves().is_empty() {
            return (!self.is_check()).then_some(DrawReason::Stalemate);
        }
        self.automatic_draw(rules)
    }

    fn automatic_draw(&self, rules: &DrawRules) -> Option<DrawReason> {
        if rules.fifty_move_halfmoves > 0 && self.halfmove_clock >= rules.fifty_move_halfmoves {
            return Some(DrawReason::FiftyMove);
        }
        if rules.repetition_count > 0 && self.repetition_count() >= rules.repetition_count {
            return Some(DrawReason::Repetition);
        }
        if rules.insufficient_material && self.is_insufficient_material() {
            return Some(DrawReason::InsufficientMaterial);
        }
        None
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && self.legal_moves().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && self.legal_moves().is_empty()
    }

    /// Neither side can mate: no pawns, rooks or queens, and at most one
    /// minor piece per side.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = [0usize; 2];
        for piece in self.placement.pieces() {
            match piece.kind() {
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                PieceKind::Knight | PieceKind::Bishop => minors[piece.color().index()] += 1,
                PieceKind::King => {}
            }
        }
        minors.iter().all(|&count| count <= 1)
    }
}
