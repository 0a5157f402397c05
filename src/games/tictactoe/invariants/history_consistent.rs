//! History consistency invariant: the history explains the board.

use super::Invariant;
use crate::games::tictactoe::{Opponent, Square};
use crate::session::GameSession;

/// Invariant: every history entry is on the board, and nothing else is.
///
/// History length equals the number of occupied squares and each played
/// square holds the mark that played it.
pub struct HistoryConsistentInvariant;

impl<O: Opponent> Invariant<GameSession<O>> for HistoryConsistentInvariant {
    fn holds(session: &GameSession<O>) -> bool {
        let board = session.board();
        let history = session.history();

        let matches = history
            .iter()
            .all(|mv| board.get(mv.position) == Square::Occupied(mv.mark));

        matches && history.len() == board.occupied()
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}
