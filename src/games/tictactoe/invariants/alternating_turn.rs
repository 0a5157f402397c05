//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::games::tictactoe::{Board, Mark, Opponent};
use crate::session::GameSession;

/// Invariant: marks alternate, starting with the human.
///
/// The history must read X, O, X, ... and the board must hold as many X
/// as O, or one more X.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    /// Checks the mark counts on a bare board: X minus O is 0 or 1.
    pub fn balanced(board: &Board) -> bool {
        let x = board.count(Mark::HUMAN);
        let o = board.count(Mark::COMPUTER);
        x == o || x == o + 1
    }
}

impl<O: Opponent> Invariant<GameSession<O>> for AlternatingTurnInvariant {
    fn holds(session: &GameSession<O>) -> bool {
        let alternates = session
            .history()
            .iter()
            .enumerate()
            .all(|(ply, mv)| {
                let expected = if ply % 2 == 0 {
                    Mark::HUMAN
                } else {
                    Mark::COMPUTER
                };
                mv.mark == expected
            });

        alternates && Self::balanced(session.board())
    }

    fn description() -> &'static str {
        "Marks alternate starting with X (X count minus O count is 0 or 1)"
    }
}
