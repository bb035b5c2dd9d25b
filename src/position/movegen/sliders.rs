use super::super::{MoveList, Piece, Position};

impl Position {
    /// Cast a ray in each direction, stopping at the first occupied square
    /// and including it only when it holds an enemy piece.
    pub(crate) fn generate_slider_moves(
        &self,
        slider: Piece,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(df, dr) in directions {
            let mut current = slider.square();
            while let Some(to) = current.offset(df, dr) {
                let blocked = !self.is_empty(to);
                self.push_step(slider, to, moves);
                if blocked {
                    break;
                }
                current = to;
            }
        }
    }
}
