use std::env;
use std::process;

use chess_rules::position::{GameState, Position};

fn usage() -> ! {
    eprintln!("usage: game_status [--fen \"<FEN>\"] <move1> <move2> ...");
    process::exit(1);
}

fn state_name(state: GameState) -> &'static str {
    match state {
        GameState::Playing => "playing",
        GameState::WhiteWin => "white_win",
        GameState::BlackWin => "black_win",
        GameState::Draw => "draw",
    }
}

fn main() {
    let mut args = env::args().skip(1).peekable();

    let mut position = if args.peek().map(String::as_str) == Some("--fen") {
        args.next();
        let Some(fen) = args.next() else { usage() };
        match Position::from_fen(&fen) {
            Ok(position) => position,
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(1);
            }
        }
    } else {
        Position::starting()
    };

    for notation in args {
        if notation.starts_with("--") {
            usage();
        }
        if let Err(err) = position.apply_coordinate_move(&notation) {
            eprintln!("error: move '{notation}': {err}");
            process::exit(1);
        }
    }

    let legal_moves = position.legal_moves();
    let state = position.game_state();
    println!("side_to_move: {}", position.side_to_move());
    println!("legal_moves: {}", legal_moves.len());
    println!("state: {}", state_name(state));
    match position.draw_reason() {
        Some(reason) => println!("draw_reason: {reason:?}"),
        None => println!("draw_reason: none"),
    }
    println!("fen: {}", position.to_fen());
    for mv in &legal_moves {
        println!("{mv}");
    }
}
