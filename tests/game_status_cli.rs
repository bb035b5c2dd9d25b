use std::process::Command;

fn run(args: &[&str]) -> (bool, String, String) {
    let exe = env!("CARGO_BIN_EXE_game_status");
    let output = Command::new(exe)
        .args(args)
        .output()
        .expect("failed to run game_status");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn reports_starting_position() {
    let (ok, stdout, _) = run(&[]);
    assert!(ok);
    assert!(stdout.contains("side_to_move: White"));
    assert!(stdout.contains("legal_moves: 20"));
    assert!(stdout.contains("state: playing"));
    assert!(stdout.contains("draw_reason: none"));
    assert!(stdout.lines().any(|line| line == "g1f3"));
}

#[test]
fn reports_checkmate_after_moves() {
    let (ok, stdout, _) = run(&["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(ok);
    assert!(stdout.contains("legal_moves: 0"));
    assert!(stdout.contains("state: black_win"));
    assert!(stdout
        .contains("fen: rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"));
}

#[test]
fn accepts_fen_argument() {
    let (ok, stdout, _) = run(&["--fen", "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"]);
    assert!(ok);
    assert!(stdout.contains("side_to_move: Black"));
    assert!(stdout.contains("state: draw"));
    assert!(stdout.contains("draw_reason: Stalemate"));
}

#[test]
fn rejects_illegal_move() {
    let (ok, _, stderr) = run(&["e2e5"]);
    assert!(!ok);
    assert!(stderr.contains("e2e5"));
}

#[test]
fn rejects_bad_fen() {
    let (ok, _, stderr) = run(&["--fen", "not a fen"]);
    assert!(!ok);
    assert!(stderr.starts_with("error:"));
}
