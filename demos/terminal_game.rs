//! Terminal Game
//!
//! This example drives a full game session from standard input.
//!
//! Key concepts:
//! - The controller owns all session state
//! - The front-end only sends intents and draws `GameView`
//! - Time travel through the move log, with branch truncation on the next move
//!
//! Commands:
//!   1-9          place a mark (cells numbered left to right, top to bottom)
//!   j <step>     jump to a move log step
//!   s            toggle move log order
//!   r            reset the game
//!   n <x|o> ...  set a player's name (leave empty to clear)
//!   q            quit
//!
//! Run with: RUST_LOG=tictactoe_timeline=debug cargo run --example terminal_game

use std::io::{self, BufRead, Write};
use tictactoe_timeline::controller::{GameController, GameView};
use tictactoe_timeline::core::Mark;
use tracing_subscriber::EnvFilter;

fn draw(view: &GameView) {
    println!();
    println!("{}", view.board);
    if let Some(line) = view.winning_line {
        let cells: Vec<String> = line.iter().map(|i| (i + 1).to_string()).collect();
        println!("Winning line: {}", cells.join(", "));
    }
    println!("{}", view.status);
    println!();
    println!("Move History ({}):", view.sort_label);
    for row in &view.moves {
        let marker = if row.clickable { " " } else { ">" };
        println!("{marker} [{}] {}", row.step, row.label);
    }
    if view.reset_enabled {
        println!("(r to reset)");
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== Tic-Tac-Toe ===");

    let mut game = GameController::new();
    draw(&game.view());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("q") => break,
            Some("s") => game.on_toggle_sort(),
            Some("r") => game.on_reset(),
            Some("j") => match parts.next().and_then(|s| s.parse::<usize>().ok()) {
                Some(step) if step < game.history().len() => game.on_history_row_click(step),
                _ => println!("No such step"),
            },
            Some("n") => {
                let mark = match parts.next() {
                    Some("x") | Some("X") => Mark::X,
                    Some("o") | Some("O") => Mark::O,
                    _ => {
                        println!("Usage: n <x|o> <name>");
                        continue;
                    }
                };
                let name = parts.collect::<Vec<_>>().join(" ");
                game.on_player_name_change(mark, name);
            }
            Some(cell) => match cell.parse::<usize>() {
                Ok(n @ 1..=9) => game.on_cell_click(n - 1),
                _ => println!("Unknown command: {cell}"),
            },
            None => continue,
        }

        draw(&game.view());
    }

    println!("\n=== Game Over ===");
    Ok(())
}
