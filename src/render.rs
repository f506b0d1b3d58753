//! Rendering contract for the game controller.
//!
//! Rendering is a pure projection of game state into a display
//! view; the controller invokes it after every transition that
//! changes observable state, never before. The controller only
//! knows the [`Renderer`] trait, so frontends (and tests) plug in
//! whatever output they like.

use crate::controller::{Outcome, Phase};
use crate::game::Board;

/// Display projection of the controller state.
///
/// Cell symbols come from an exhaustive match over the three square
/// values, so the mapping has no undefined case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Display symbol per square: `""`, `"X"`, or `"O"`.
    pub cells: [&'static str; 9],
    /// Whose turn the controller believes it is.
    pub phase: Phase,
    /// Terminal result, if any.
    pub outcome: Outcome,
}

impl BoardView {
    /// Projects controller state into a view.
    pub fn project(board: &Board, phase: Phase, outcome: Outcome) -> Self {
        let mut cells = [""; 9];
        for (pos, square) in board.squares().iter().enumerate() {
            cells[pos] = square.symbol();
        }
        Self {
            cells,
            phase,
            outcome,
        }
    }

    /// One-line status text for the scoreboard.
    pub fn status_line(&self) -> &'static str {
        match self.outcome {
            Outcome::HumanWin => "You win!",
            Outcome::ComputerWin => "The computer wins.",
            Outcome::Tie => "It's a tie.",
            Outcome::InProgress => match self.phase {
                Phase::HumanTurn => "Your turn.",
                Phase::AwaitingComputer => "Thinking...",
                // Unreachable in practice: a finished game always
                // carries a terminal outcome.
                Phase::GameOver => "Game over.",
            },
        }
    }
}

/// Display collaborator owned by the controller.
pub trait Renderer {
    /// Replaces the rendered board with a fresh projection.
    fn render(&mut self, view: &BoardView);

    /// Surfaces a user-visible message outside the board, such as a
    /// failed move request.
    fn notice(&mut self, message: &str);
}

/// Renders the board as an HTML table body.
///
/// The markup replaces the board container's contents wholesale on
/// every render, so an input binder must re-attach tap handlers
/// afterwards. Only free squares carry a `data-square` index; an
/// occupied square is not a bind target.
#[derive(Debug, Default, Clone)]
pub struct HtmlRenderer {
    markup: String,
    status: String,
    notice: Option<String>,
}

impl HtmlRenderer {
    /// Creates a renderer with an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered markup.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// The last rendered status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The last surfaced notice, if any.
    pub fn notice_text(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, view: &BoardView) {
        let mut markup = String::from("<tbody>");
        for row in 0..3 {
            markup.push_str("<tr>");
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = view.cells[pos];
                if symbol.is_empty() {
                    markup.push_str(&format!("<td class=\"square free\" data-square=\"{pos}\"></td>"));
                } else {
                    markup.push_str(&format!("<td class=\"square\">{symbol}</td>"));
                }
            }
            markup.push_str("</tr>");
        }
        markup.push_str("</tbody>");

        self.markup = markup;
        self.status = view.status_line().to_string();
        self.notice = None;
    }

    fn notice(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }
}
