//! Automated opponents.

use super::{Board, Position, minimax};
use tracing::debug;

/// Something that can choose the computer's move.
pub trait Opponent {
    /// Chooses a move for `O` on `board`.
    ///
    /// Returns `None` only when there is nothing to play.
    fn choose_move(&mut self, board: &Board) -> Option<Position>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}

/// Opponent that plays the exhaustive minimax move. It never loses.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxOpponent;

impl Opponent for MinimaxOpponent {
    fn choose_move(&mut self, board: &Board) -> Option<Position> {
        let result = minimax::analyze(board);
        debug!(
            ai = self.name(),
            position = ?result.best_move(),
            score = result.score(),
            "AI chose position"
        );
        *result.best_move()
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
