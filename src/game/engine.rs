//! Move selection for the computer opponent.
//!
//! Opening moves use cheap heuristics (corners and center have
//! well-established values), everything past the second move is a
//! brute-force minimax over the remaining squares. Selection is
//! deterministic: among equally scored moves the lowest index wins,
//! which keeps the service's replies reproducible for a given board.

use super::rules::{self, GameStatus};
use super::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// The center square.
const CENTER: usize = 4;

/// The four corner squares.
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Chooses the next move for whichever player is on move.
///
/// Returns `None` if the game is already over (won or full board).
#[instrument(skip(board), fields(board = %board.display()))]
pub fn choose_move(board: &Board) -> Option<usize> {
    if rules::status(board) != GameStatus::InProgress {
        return None;
    }

    let mover = rules::to_move(board);

    if let Some(pos) = opening_move(board, mover) {
        debug!(position = pos, ?mover, "opening heuristic");
        return Some(pos);
    }

    let (pos, score) = maximized(*board, mover);
    debug!(position = ?pos, score, ?mover, "minimax selection");
    pos
}

/// Heuristics for the first two moves, where minimax is expensive
/// and the opening book is settled: take a corner when opening, and
/// answer a corner opening with the center (or vice versa).
fn opening_move(board: &Board, mover: Player) -> Option<usize> {
    match board.filled() {
        0 => Some(CORNERS[0]),
        1 => {
            let opponent = Square::Occupied(mover.opponent());
            if CORNERS.iter().any(|&c| board.get(c) == Some(opponent)) {
                Some(CENTER)
            } else if board.get(CENTER) == Some(opponent) {
                Some(CORNERS[0])
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Plays out every free square for `mover` and keeps the best score.
fn maximized(board: Board, mover: Player) -> (Option<usize>, i32) {
    let mut best: Option<(usize, i32)> = None;

    for pos in 0..9 {
        if !board.is_empty(pos) {
            continue;
        }

        let next = place(board, pos, mover);
        let score = match rules::status(&next) {
            GameStatus::InProgress => minimized(next, mover).1,
            _ => score_for(&next, mover),
        };

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((pos, score));
        }
    }

    match best {
        Some((pos, score)) => (Some(pos), score),
        None => (None, 0),
    }
}

/// The opponent's reply search: assumes the opponent plays to
/// minimize `mover`'s score.
fn minimized(board: Board, mover: Player) -> (Option<usize>, i32) {
    let mut best: Option<(usize, i32)> = None;

    for pos in 0..9 {
        if !board.is_empty(pos) {
            continue;
        }

        let next = place(board, pos, mover.opponent());
        let score = match rules::status(&next) {
            GameStatus::InProgress => maximized(next, mover).1,
            _ => score_for(&next, mover),
        };

        if best.map_or(true, |(_, s)| score < s) {
            best = Some((pos, score));
        }
    }

    match best {
        Some((pos, score)) => (Some(pos), score),
        None => (None, 0),
    }
}

/// Scores a finished (or scored-as-is) board from `mover`'s side.
fn score_for(board: &Board, mover: Player) -> i32 {
    match rules::check_winner(board) {
        Some(winner) if winner == mover => 1,
        Some(_) => -1,
        None => 0,
    }
}

/// Copies the board with one extra mark placed. `pos` must be in range.
fn place(board: Board, pos: usize, mark: Player) -> Board {
    let mut squares = *board.squares();
    squares[pos] = Square::Occupied(mark);
    Board::from_squares(squares)
}
