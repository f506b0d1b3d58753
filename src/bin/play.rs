//! Terminal client for the move service.
//!
//! Drives a [`GameController`] against a live service: type a
//! square index to tap it, `r` to restart a finished game, `q` to
//! quit.

use anyhow::Result;
use tictactoe_web::render::{BoardView, Renderer};
use tictactoe_web::{GameController, HttpTransport};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Prints the board as a 3x3 grid on stdout.
struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &BoardView) {
        println!();
        for row in 0..3 {
            let symbols: Vec<&str> = (0..3)
                .map(|col| {
                    let symbol = view.cells[row * 3 + col];
                    if symbol.is_empty() { " " } else { symbol }
                })
                .collect();
            println!(" {} | {} | {}", symbols[0], symbols[1], symbols[2]);
            if row < 2 {
                println!("---+---+---");
            }
        }
        println!("{}", view.status_line());
    }

    fn notice(&mut self, message: &str) {
        println!("! {message}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url =
        std::env::var("TICTACTOE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    println!("Playing against {base_url}");
    println!("Squares are numbered 0-8, left to right, top to bottom.");
    println!("Enter a square to play, 'r' to restart a finished game, 'q' to quit.");

    let mut game = GameController::new(HttpTransport::new(base_url), TerminalRenderer);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => {}
            "q" => break,
            "r" => game.restart(),
            input => match input.parse::<usize>() {
                Ok(pos) => game.handle_tap(pos).await,
                Err(_) => println!("unrecognized input: {input}"),
            },
        }
    }

    Ok(())
}
