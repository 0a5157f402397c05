//! Position classification for tic-tac-toe.

use super::super::{Board, Mark};
use super::{draw::is_full, win::check_winner};
use serde::{Deserialize, Serialize};

/// Outcome of a position, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Nobody has won and empty squares remain.
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// The board is full with no winner.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(*mark),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(mark) => write!(f, "Player {:?} wins", mark),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a board.
///
/// Precedence: human win, computer win, draw, in progress.
pub fn classify(board: &Board) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        GameOutcome::Win(winner)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
