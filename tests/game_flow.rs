//! Drives the board the way an interactive game loop would: alternate
//! sides, reject bad input, and stop on a terminal state.

use chess_rules::board::prelude::*;

enum Status {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

fn status(board: &Board, to_move: Color) -> Status {
    if board.is_check(to_move) {
        if board.is_checkmate(to_move) {
            Status::Checkmate
        } else {
            Status::Check
        }
    } else if board.is_stalemate(to_move) {
        Status::Stalemate
    } else {
        Status::Ongoing
    }
}

fn own_piece(board: &Board, sq: Square, color: Color) -> bool {
    board.piece_at(sq).is_some_and(|p| p.color() == color)
}

#[test]
fn scholars_mate_game() {
    let mut board = Board::new();
    let mut to_move = Color::White;
    let game = [
        (Square(6, 4), Square(4, 4)),
        (Square(1, 4), Square(3, 4)),
        (Square(7, 5), Square(4, 2)),
        (Square(0, 1), Square(2, 2)),
        (Square(7, 3), Square(3, 7)),
        (Square(0, 6), Square(2, 5)),
        (Square(3, 7), Square(1, 5)),
    ];

    for (from, to) in game {
        assert!(matches!(status(&board, to_move), Status::Ongoing));
        assert!(own_piece(&board, from, to_move));
        assert!(board.attempt_move(from, to, None), "{from}-{to}");
        to_move = to_move.opponent();
    }

    assert_eq!(to_move, Color::Black);
    assert!(matches!(status(&board, to_move), Status::Checkmate));
}

#[test]
fn illegal_input_keeps_turn() {
    let mut board = Board::new();
    let before = board;

    // Wrong shape, blocked path, empty source.
    assert!(!board.attempt_move(Square(6, 4), Square(3, 4), None));
    assert!(!board.attempt_move(Square(7, 0), Square(5, 0), None));
    assert!(!board.attempt_move(Square(3, 3), Square(2, 3), None));
    assert_eq!(board, before);

    let err = board
        .try_move(Square(7, 2), Square(5, 4), None)
        .expect_err("bishop is blocked");
    assert!(matches!(err, MoveError::IllegalPattern { .. }));
}

#[test]
fn check_is_announced_then_answered() {
    let mut board = Board::new();
    for (from, to) in [
        (Square(6, 4), Square(4, 4)),
        (Square(1, 5), Square(2, 5)),
        (Square(7, 3), Square(3, 7)),
    ] {
        assert!(board.attempt_move(from, to, None));
    }

    assert!(matches!(status(&board, Color::Black), Status::Check));
    // Only the g-pawn can block on g6.
    assert!(!board.attempt_move(Square(1, 0), Square(2, 0), None));
    assert!(board.attempt_move(Square(1, 6), Square(2, 6), None));
    assert!(matches!(status(&board, Color::White), Status::Ongoing));
}
