//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board: win detection over the
//! eight line sets, draw detection, and turn inference. Rules are
//! separated from board storage so the move engine, the HTTP
//! handler, and the client controller all evaluate state the
//! same way.

use super::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// The eight winning line sets, as board indices in row-major order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Checks for a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let occ = board.get(a)?;

        if occ != Square::Empty && Some(occ) == board.get(b) && Some(occ) == board.get(c) {
            return match occ {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Evaluates the board into a game status.
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

/// Infers the player on move from filled-square parity.
///
/// X moves first, so an even number of occupied squares means X is
/// on move. Parity is the only turn signal a stateless board
/// encoding carries: a duplicated or reordered request flips whose
/// move the service thinks it is computing.
pub fn to_move(board: &Board) -> Player {
    if board.filled() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}
