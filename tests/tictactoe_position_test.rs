//! Tests for tic-tac-toe positions and board coordinates.

use strictly_minimax::{Board, Mark, Position, Square, legal_moves};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_row_col() {
    assert_eq!(Position::from_row_col(0, 0), Some(Position::TopLeft));
    assert_eq!(Position::from_row_col(1, 2), Some(Position::MiddleRight));
    assert_eq!(Position::from_row_col(2, 1), Some(Position::BottomCenter));
    assert_eq!(Position::from_row_col(3, 0), None);
    assert_eq!(Position::from_row_col(0, 3), None);
}

#[test]
fn test_row_col_agree_with_index() {
    for pos in Position::ALL {
        assert_eq!(pos.row() * 3 + pos.col(), pos.to_index());
        assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
    }
}

#[test]
fn test_legal_moves_empty_board() {
    assert_eq!(legal_moves(&Board::new()), Position::ALL.to_vec());
}

#[test]
fn test_legal_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Mark::X));
    board.set(Position::Center, Square::Occupied(Mark::O));

    let valid = legal_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
