use serde::Deserialize;

use chess_rules::position::{DrawReason, GameState, Position};
use chess_rules::Game;

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Fixture>,
}

#[derive(Deserialize)]
struct Fixture {
    name: String,
    fen: String,
    legal_moves: usize,
    state: String,
    #[serde(default)]
    draw_reason: Option<String>,
}

const GAME_OF_THE_CENTURY: &str = r#"[Event "Third Rosenwald Trophy"]
[Site "New York, NY USA"]
[Date "1956.10.17"]
[Round "8"]
[White "Donald Byrne"]
[Black "Robert James Fischer"]
[Result "0-1"]

1. Nf3 Nf6 2. c4 g6 3. Nc3 Bg7 4. d4 O-O 5. Bf4 d5 6. Qb3 dxc4 7. Qxc4 c6
8. e4 Nbd7 9. Rd1 Nb6 10. Qc5 Bg4 11. Bg5 {11. Be2 followed by 12. O-O would
have been more prudent.} Na4 !! 12. Qa3 Nxc3 13. bxc3 Nxe4 14. Bxe7 Qb6
15. Bc4 Nxc3 16. Bc5 Rfe8+ 17. Kf1 Be6 $1 18. Bxb6 Bxc4+ 19. Kg1 Ne2+
20. Kf1 Nxd4+ 21. Kg1 Ne2+ 22. Kf1 Nc3+ 23. Kg1 axb6 24. Qb4 Ra4 25. Qxb6
Nxd1 26. h3 Rxa2 27. Kh2 Nxf2 28. Re1 Rxe1 29. Qd8+ Bf8 30. Nxe1 Bd5 31. Nf3
Ne4 32. Qb8 b5 33. h4 h5 34. Ne5 Kg7 35. Kg1 Bc5+ 36. Kf1 Ng3+ 37. Ke1 Bb4+
38. Kd1 Bb3+ 39. Kc1 Ne2+ 40. Kb1 Nc3+ 41. Kc1 Rc2# 0-1
"#;

#[test]
fn fixture_positions() {
    let data = include_str!("data/positions.json");
    let set: PositionSet = serde_json::from_str(data).expect("invalid positions.json");

    for fixture in &set.positions {
        let position = Position::from_fen(&fixture.fen)
            .unwrap_or_else(|err| panic!("{}: {err}", fixture.name));
        assert_eq!(
            position.legal_moves().len(),
            fixture.legal_moves,
            "legal move count for {}",
            fixture.name
        );
        assert_eq!(
            format!("{:?}", position.game_state()),
            fixture.state,
            "state for {}",
            fixture.name
        );
        assert_eq!(
            position.draw_reason().map(|reason| format!("{reason:?}")),
            fixture.draw_reason,
            "draw reason for {}",
            fixture.name
        );
        assert_eq!(position.to_fen(), fixture.fen, "round trip for {}", fixture.name);
    }
}

#[test]
fn game_of_the_century_replays() {
    let game = Game::from_pgn(GAME_OF_THE_CENTURY).expect("PGN should parse");

    assert_eq!(game.tag("White"), Some("Donald Byrne"));
    assert_eq!(game.moves().len(), 82);
    assert_eq!(game.san_moves().last().map(String::as_str), Some("Rc2#"));
    assert_eq!(game.result(), GameState::BlackWin);
    assert!(game.position().is_checkmate());

    let boards: Vec<String> = game.positions().iter().map(Position::to_fen).collect();
    assert_eq!(boards.len(), 83);
    assert_eq!(
        boards[8],
        "rnbq1rk1/ppppppbp/5np1/8/2PP4/2N2N2/PP2PPPP/R1BQKB1R w KQ - 1 5"
    );
    assert_eq!(
        boards[71],
        "1Q6/5pk1/2p3p1/1pbbN2p/4n2P/8/r5P1/5K2 b - - 5 36"
    );
}

#[test]
fn written_pgn_reads_back() {
    let original = Game::from_pgn(GAME_OF_THE_CENTURY).unwrap();
    let text = original.to_pgn();
    assert!(text.contains("[Black \"Robert James Fischer\"]"));
    assert!(text.contains("[Result \"0-1\"]"));
    assert!(text.lines().all(|line| line.len() <= 80));
    let movetext: Vec<&str> = text.split_whitespace().collect();
    assert!(movetext.ends_with(&["41.", "Kc1", "Rc2#", "0-1"]));

    let reread = Game::from_pgn(&text).unwrap();
    assert_eq!(reread.moves(), original.moves());
    assert_eq!(reread.position(), original.position());
}

#[test]
fn knight_shuffle_repeats_to_a_draw() {
    let mut game = Game::default();
    for san in ["Nf3", "Nf6", "Ng1", "Ng8", "Nf3", "Nf6", "Ng1"] {
        game.play_san(san).unwrap();
    }
    assert_eq!(game.result(), GameState::Playing);

    game.play_san("Ng8").unwrap();
    assert_eq!(game.position().repetition_count(), 3);
    assert_eq!(game.position().draw_reason(), Some(DrawReason::Repetition));
    assert_eq!(game.result(), GameState::Draw);
    assert!(game.to_pgn().ends_with("1/2-1/2\n"));
}

#[test]
fn scholars_mate_by_coordinates() {
    let mut position = Position::starting();
    for uci in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"] {
        position.apply_coordinate_move(uci).unwrap();
    }
    assert!(position.is_checkmate());
    assert_eq!(position.game_state(), GameState::WhiteWin);
    assert_eq!(position.game_state().winner(), Some(chess_rules::Color::White));
}
