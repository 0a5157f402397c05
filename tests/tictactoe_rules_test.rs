//! Tests for the rules engine over every reachable board.

use std::collections::HashSet;
use strictly_minimax::invariants::AlternatingTurnInvariant;
use strictly_minimax::minimax::{COMPUTER_WIN, DRAW, HUMAN_WIN};
use strictly_minimax::{
    Board, GameOutcome, Mark, Position, classify, evaluate, is_full, is_winner, legal_moves,
};

/// Every board reachable from the empty board by alternating legal moves,
/// stopping at terminal positions.
fn reachable_boards() -> HashSet<Board> {
    fn walk(board: Board, to_move: Mark, seen: &mut HashSet<Board>) {
        if !seen.insert(board) || classify(&board).is_terminal() {
            return;
        }
        for pos in legal_moves(&board) {
            walk(board.with(pos, to_move), to_move.opponent(), seen);
        }
    }

    let mut seen = HashSet::new();
    walk(Board::new(), Mark::HUMAN, &mut seen);
    seen
}

#[test]
fn test_reachable_board_count() {
    // Well-known count of legal tic-tac-toe positions, empty board included.
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_reachable_boards_never_have_two_winners() {
    for board in reachable_boards() {
        assert!(
            !(is_winner(&board, Mark::X) && is_winner(&board, Mark::O)),
            "two winners on\n{}",
            board
        );
        assert!(AlternatingTurnInvariant::balanced(&board));
    }
}

#[test]
fn test_classify_is_consistent_with_predicates() {
    for board in reachable_boards() {
        let expected = if is_winner(&board, Mark::X) {
            GameOutcome::Win(Mark::X)
        } else if is_winner(&board, Mark::O) {
            GameOutcome::Win(Mark::O)
        } else if is_full(&board) {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        };
        assert_eq!(classify(&board), expected, "on\n{}", board);
    }
}

#[test]
fn test_terminal_evaluation_matches_classification() {
    for board in reachable_boards() {
        let expected = match classify(&board) {
            GameOutcome::InProgress => continue,
            GameOutcome::Win(Mark::O) => COMPUTER_WIN,
            GameOutcome::Win(Mark::X) => HUMAN_WIN,
            GameOutcome::Draw => DRAW,
        };
        assert_eq!(evaluate(board, true), expected, "on\n{}", board);
        assert_eq!(evaluate(board, false), expected, "on\n{}", board);
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let board: Board = "XOX XOO OXX".parse().unwrap();
    assert_eq!(classify(&board), GameOutcome::Draw);
    assert!(legal_moves(&board).is_empty());
}

#[test]
fn test_legal_moves_are_row_major() {
    let board = Board::new()
        .with(Position::BottomRight, Mark::X)
        .with(Position::TopLeft, Mark::O);
    let moves = legal_moves(&board);

    assert_eq!(moves.len(), 7);
    assert!(moves.windows(2).all(|w| w[0].to_index() < w[1].to_index()));
}
