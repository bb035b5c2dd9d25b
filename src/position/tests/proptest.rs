//! Property-based tests using proptest.

use crate::position::{Color, GameState, Move, Position, Square};
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves from the starting position.
fn random_walk(seed: u64, plies: usize) -> Position {
    use rand::prelude::*;

    let mut position = Position::starting();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..plies {
        let moves = position.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        position.apply_move(&mv).unwrap();
    }
    position
}

proptest! {
    /// Property: FEN produced by to_fen parses back to the same text
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), plies in move_count_strategy()) {
        let position = random_walk(seed, plies);
        let fen = position.to_fen();
        let restored = Position::from_fen(&fen).unwrap();
        prop_assert_eq!(restored.to_fen(), fen);
        prop_assert_eq!(&restored, &position);
        prop_assert_eq!(restored.signature(), position.signature());
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), plies in move_count_strategy()) {
        let position = random_walk(seed, plies);
        let mover = position.side_to_move();
        for mv in &position.legal_moves() {
            let next = position.with_move(mv).unwrap();
            prop_assert!(!next.is_king_in_check(mover),
                "Legal move left king in check: {:?}", mv);
            prop_assert_eq!(next.side_to_move(), mover.opponent());
        }
    }

    /// Property: a refused move leaves the position and history untouched
    #[test]
    fn prop_rejected_move_does_not_mutate(
        seed in seed_strategy(),
        plies in move_count_strategy(),
        from in 0..64usize,
        to in 0..64usize,
    ) {
        let mut position = random_walk(seed, plies);
        let (Some(from), Some(to)) = (Square::from_index(from), Square::from_index(to)) else {
            return Ok(());
        };
        let candidate = Move::quiet(from, to);
        prop_assume!(!position.legal_moves().contains(&candidate));

        let before = position.clone();
        prop_assert!(position.apply_move(&candidate).is_err());
        prop_assert_eq!(&position, &before);
        prop_assert_eq!(position.history(), before.history());
    }

    /// Property: exactly one king per side survives any game
    #[test]
    fn prop_kings_survive(seed in seed_strategy(), plies in move_count_strategy()) {
        let position = random_walk(seed, plies);
        for color in Color::BOTH {
            prop_assert!(position.king_square(color).is_some());
        }
        prop_assert!(position.history().len() <= plies + 1);
    }

    /// Property: game state agrees with the checkmate and stalemate predicates
    #[test]
    fn prop_game_state_consistent(seed in seed_strategy(), plies in move_count_strategy()) {
        let position = random_walk(seed, plies);
        match position.game_state() {
            GameState::WhiteWin | GameState::BlackWin => {
                prop_assert!(position.is_checkmate());
            }
            GameState::Draw => prop_assert!(position.draw_reason().is_some()),
            GameState::Playing => {
                prop_assert!(!position.legal_moves().is_empty());
                prop_assert!(position.draw_reason().is_none());
            }
        }
    }

    /// Property: SAN of every legal move parses back to that move
    #[test]
    fn prop_san_roundtrip(seed in seed_strategy(), plies in move_count_strategy()) {
        let position = random_walk(seed, plies);
        for mv in &position.legal_moves() {
            let san = position.move_to_san(mv);
            prop_assert_eq!(position.parse_san(&san).unwrap(), *mv, "{}", san);
        }
    }
}
