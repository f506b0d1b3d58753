//! Tests for view projection and the HTML renderer.

use tictactoe_web::render::{BoardView, HtmlRenderer, Renderer};
use tictactoe_web::{Outcome, Phase, decode_board};

#[test]
fn test_projection_maps_squares_to_symbols() {
    let board = decode_board("102000000").unwrap();
    let view = BoardView::project(&board, Phase::HumanTurn, Outcome::InProgress);

    assert_eq!(view.cells[0], "X");
    assert_eq!(view.cells[1], "");
    assert_eq!(view.cells[2], "O");
    assert_eq!(view.status_line(), "Your turn.");
}

#[test]
fn test_status_line_reflects_outcome_over_phase() {
    let board = decode_board("111220000").unwrap();
    let view = BoardView::project(&board, Phase::GameOver, Outcome::HumanWin);
    assert_eq!(view.status_line(), "You win!");

    let view = BoardView::project(&board, Phase::GameOver, Outcome::ComputerWin);
    assert_eq!(view.status_line(), "The computer wins.");

    let view = BoardView::project(&board, Phase::GameOver, Outcome::Tie);
    assert_eq!(view.status_line(), "It's a tie.");

    let board = decode_board("000010000").unwrap();
    let view = BoardView::project(&board, Phase::AwaitingComputer, Outcome::InProgress);
    assert_eq!(view.status_line(), "Thinking...");
}

#[test]
fn test_html_renderer_marks_only_free_squares_interactive() {
    let board = decode_board("100020000").unwrap();
    let view = BoardView::project(&board, Phase::HumanTurn, Outcome::InProgress);

    let mut renderer = HtmlRenderer::new();
    renderer.render(&view);

    let markup = renderer.markup();
    assert!(markup.starts_with("<tbody>"));
    assert!(markup.ends_with("</tbody>"));
    assert_eq!(markup.matches("<tr>").count(), 3);
    assert_eq!(markup.matches("<td").count(), 9);

    // Occupied squares carry their symbol and no bind target.
    assert!(markup.contains("<td class=\"square\">X</td>"));
    assert!(markup.contains("<td class=\"square\">O</td>"));
    assert!(!markup.contains("data-square=\"0\""));
    assert!(!markup.contains("data-square=\"4\""));

    // Free squares are the bind targets, rebound on every render
    // since the markup is replaced wholesale.
    assert_eq!(markup.matches("data-square").count(), 7);
    assert!(markup.contains("data-square=\"1\""));

    assert_eq!(renderer.status(), "Your turn.");
}

#[test]
fn test_html_renderer_clears_notice_on_render() {
    let mut renderer = HtmlRenderer::new();
    renderer.notice("The computer could not move");
    assert_eq!(renderer.notice_text(), Some("The computer could not move"));

    let board = decode_board("000000000").unwrap();
    renderer.render(&BoardView::project(
        &board,
        Phase::HumanTurn,
        Outcome::InProgress,
    ));
    assert_eq!(renderer.notice_text(), None);
}
