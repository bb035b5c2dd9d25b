use super::super::attack_tables::{squares_in, KNIGHT_TARGETS};
use super::super::{MoveList, Piece, Position};

impl Position {
    pub(crate) fn generate_knight_moves(&self, knight: Piece, moves: &mut MoveList) {
        for to in squares_in(KNIGHT_TARGETS[knight.square().index()]) {
            self.push_step(knight, to, moves);
        }
    }
}
