//! Legal move enumeration for tic-tac-toe.

use super::super::{Board, Position};

/// Returns every empty position in row-major order.
///
/// Safe on any board: a full board yields an empty list. Callers that
/// care about terminal positions must classify the board first, since a
/// won board may still have empty squares.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect()
}
