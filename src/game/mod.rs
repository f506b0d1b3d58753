//! Pure tic-tac-toe domain: board storage, rules, and the move engine.

pub mod engine;
mod rules;
mod types;

pub use rules::{GameStatus, LINES, check_winner, status, to_move};
pub use types::{Board, OutOfBounds, Player, Square};
