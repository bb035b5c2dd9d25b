use super::super::types::PROMOTION_KINDS;
use super::super::{Move, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, pawn: Piece, moves: &mut MoveList) {
        let color = pawn.color();
        let from = pawn.square();
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(0, dir) {
            if self.is_empty(forward) {
                push_pawn_move(from, forward, false, color.promotion_row(), moves);

                if from.row() == color.pawn_start_row() {
                    if let Some(double) = forward.offset(0, dir) {
                        if self.is_empty(double) {
                            moves.push(Move::double_pawn_push(from, double));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(df, dir) else {
                continue;
            };
            match self.color_at(target) {
                Some(occupant) if occupant != color => {
                    push_pawn_move(from, target, true, color.promotion_row(), moves);
                }
                Some(_) => {}
                None => {
                    if self.en_passant == Some(target)
                        && target.row() == color.en_passant_capture_row()
                    {
                        moves.push(Move::en_passant(from, target));
                    }
                }
            }
        }
    }
}

/// Push a pawn move, fanning out into one move per promotion kind when it
/// lands on the last row.
fn push_pawn_move(
    from: Square,
    to: Square,
    is_capture: bool,
    promotion_row: usize,
    moves: &mut MoveList,
) {
    if to.row() == promotion_row {
        for kind in PROMOTION_KINDS {
            moves.push(Move::promotion_to(from, to, kind, is_capture));
        }
    } else if is_capture {
        moves.push(Move::capture(from, to));
    } else {
        moves.push(Move::quiet(from, to));
    }
}
