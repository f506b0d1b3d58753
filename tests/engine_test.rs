//! Tests for the move-selection engine.

use tictactoe_web::game::{self, GameStatus, engine};
use tictactoe_web::{Player, Square, decode_board, encode_board};

#[test]
fn test_empty_board_self_play_always_ties() {
    // Two perfect players can only draw.
    let mut board = decode_board("000000000").unwrap();

    while game::status(&board) == GameStatus::InProgress {
        let mover = game::to_move(&board);
        let pos = engine::choose_move(&board).expect("in-progress board has a move");
        board.set(pos, Square::Occupied(mover)).unwrap();
    }

    assert_eq!(game::status(&board), GameStatus::Draw);
    assert!(board.is_full());
}

#[test]
fn test_opening_takes_a_corner() {
    let board = decode_board("000000000").unwrap();
    let pos = engine::choose_move(&board).unwrap();
    assert!([0, 2, 6, 8].contains(&pos));
}

#[test]
fn test_corner_opening_answered_with_center() {
    // X opened in a corner; O must take the center.
    let board = decode_board("100000000").unwrap();
    assert_eq!(game::to_move(&board), Player::O);
    assert_eq!(engine::choose_move(&board), Some(4));
}

#[test]
fn test_center_opening_answered_with_corner() {
    let board = decode_board("000010000").unwrap();
    let pos = engine::choose_move(&board).unwrap();
    assert!([0, 2, 6, 8].contains(&pos));
}

#[test]
fn test_takes_the_winning_square() {
    // X on move with the 2-4-6 diagonal open at 6.
    let mut board = decode_board("201210000").unwrap();
    assert_eq!(game::to_move(&board), Player::X);

    let pos = engine::choose_move(&board).unwrap();
    assert_eq!(pos, 6);

    board.set(pos, Square::Occupied(Player::X)).unwrap();
    assert_eq!(encode_board(&board), "201210100");
    assert_eq!(game::status(&board), GameStatus::Won(Player::X));
}

#[test]
fn test_blocks_an_immediate_threat() {
    // X threatens the top row at 2; any other reply loses for O.
    let board = decode_board("110020000").unwrap();
    assert_eq!(game::to_move(&board), Player::O);
    assert_eq!(engine::choose_move(&board), Some(2));
}

#[test]
fn test_turn_parity_alternates() {
    let mut board = decode_board("001000000").unwrap();
    assert_eq!(game::to_move(&board), Player::O);

    let pos = engine::choose_move(&board).unwrap();
    board.set(pos, Square::Occupied(Player::O)).unwrap();
    assert_eq!(game::to_move(&board), Player::X);
}

#[test]
fn test_no_move_for_terminal_boards() {
    let won = decode_board("111220000").unwrap();
    assert_eq!(engine::choose_move(&won), None);

    let tied = decode_board("112221121").unwrap();
    assert_eq!(engine::choose_move(&tied), None);
}
