//! Wire protocol between the game controller and the move service.
//!
//! A board travels to the service as a 9-character digit string in
//! the request path (one digit per square, row-major, `0` empty,
//! `1` X, `2` O). The service replies with a JSON payload carrying
//! the authoritative board plus terminal-state flags. Everything
//! that crosses the boundary is validated here before the
//! controller is allowed to apply it.

use crate::game::{self, Board, GameStatus, Player, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Number of squares in a board encoding.
pub const BOARD_CELLS: usize = 9;

/// Errors produced while encoding or validating wire data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ProtocolError {
    /// Board encoding is not exactly nine characters.
    #[display("board encoding must be 9 digits, got {_0}")]
    BadLength(#[error(not(source))] usize),
    /// Board encoding contains a character outside `0`-`2`.
    #[display("invalid board digit {_0:?}")]
    BadDigit(#[error(not(source))] char),
    /// Response squares array is not exactly nine entries.
    #[display("squares array must have 9 entries, got {_0}")]
    BadSquareCount(#[error(not(source))] usize),
    /// Response squares array contains a value outside 0-2.
    #[display("invalid square value {_0}")]
    BadSquareValue(#[error(not(source))] u8),
    /// Response winner is neither null, 1, nor 2.
    #[display("invalid winner value {_0}")]
    BadWinner(#[error(not(source))] u8),
}

/// Encodes a board as its 9-digit path segment.
pub fn encode_board(board: &Board) -> String {
    board
        .squares()
        .iter()
        .map(|square| char::from(b'0' + square.to_digit()))
        .collect()
}

/// Decodes a 9-digit path segment into a board.
pub fn decode_board(encoded: &str) -> Result<Board, ProtocolError> {
    let chars: Vec<char> = encoded.chars().collect();
    if chars.len() != BOARD_CELLS {
        return Err(ProtocolError::BadLength(chars.len()));
    }

    let mut squares = [Square::Empty; BOARD_CELLS];
    for (pos, ch) in chars.into_iter().enumerate() {
        let digit = ch
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .ok_or(ProtocolError::BadDigit(ch))?;
        squares[pos] = Square::from_digit(digit).ok_or(ProtocolError::BadDigit(ch))?;
    }

    Ok(Board::from_squares(squares))
}

/// Move service response payload.
///
/// `squares` is the full authoritative board; the client replaces
/// its local board wholesale rather than merging square by square.
/// `winner` uses the square digit encoding (1 = X, 2 = O) and is
/// null for a tie or an unfinished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// The board after the service's move, as nine digits.
    pub squares: Vec<u8>,
    /// Whether the game ended with this move.
    pub is_over: bool,
    /// The winning mark, if any.
    pub winner: Option<u8>,
}

/// A `MoveResponse` whose shape has been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// The authoritative board.
    pub board: Board,
    /// Whether the game is over.
    pub is_over: bool,
    /// The winner, if the game ended in a win.
    pub winner: Option<Player>,
}

impl MoveResponse {
    /// Builds the service response for a board, deriving the
    /// terminal flags from the rules.
    pub fn from_board(board: &Board) -> Self {
        let status = game::status(board);
        Self {
            squares: board.squares().iter().map(|s| s.to_digit()).collect(),
            is_over: status != GameStatus::InProgress,
            winner: match status {
                GameStatus::Won(player) => Some(player.to_digit()),
                GameStatus::InProgress | GameStatus::Draw => None,
            },
        }
    }

    /// Validates the payload shape and converts it to domain types.
    ///
    /// A wrong-length squares array, an out-of-range square value,
    /// or a nonsense winner is an error here so that a malformed
    /// payload surfaces as a failed request instead of a bad render.
    pub fn validate(&self) -> Result<Verdict, ProtocolError> {
        if self.squares.len() != BOARD_CELLS {
            return Err(ProtocolError::BadSquareCount(self.squares.len()));
        }

        let mut squares = [Square::Empty; BOARD_CELLS];
        for (pos, &value) in self.squares.iter().enumerate() {
            squares[pos] =
                Square::from_digit(value).ok_or(ProtocolError::BadSquareValue(value))?;
        }

        let winner = match self.winner {
            None => None,
            Some(value) => {
                Some(Player::from_digit(value).ok_or(ProtocolError::BadWinner(value))?)
            }
        };

        Ok(Verdict {
            board: Board::from_squares(squares),
            is_over: self.is_over,
            winner,
        })
    }
}
