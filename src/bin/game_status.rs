use std::env;
use std::process::ExitCode;

use chess_core::board::Position;
use chess_core::game::Game;

fn parse_squares(text: &str) -> Option<(Position, Position)> {
    if text.len() != 4 || !text.is_ascii() {
        return None;
    }
    let from = text[..2].parse().ok()?;
    let to = text[2..].parse().ok()?;
    Some((from, to))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: game_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for text in args.iter().skip(1) {
        let Some((from, to)) = parse_squares(text) else {
            eprintln!("Error: invalid move notation '{text}'");
            return ExitCode::FAILURE;
        };
        if let Err(e) = game.try_move(from, to) {
            eprintln!("Error: {text}: {e}");
            return ExitCode::FAILURE;
        }
    }

    let board = game.board();
    let side = game.current_turn();
    let legal_moves = game.legal_moves();
    println!("{board}");
    println!("side_to_move: {side}");
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {}", board.is_in_check(side));
    println!("checkmate: {}", board.is_checkmate(side));
    println!("stalemate: {}", board.is_stalemate(side));
    println!("status: {}", game.status_line());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
