//! Turn controller for a human-versus-computer game.
//!
//! [`GameSession`] owns the authoritative board. The human submits moves;
//! after each accepted human move the session asks its [`Opponent`] for a
//! reply on the same call, so callers only ever observe the session with
//! the human to move or the game over.

use crate::games::tictactoe::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use crate::games::tictactoe::{
    Board, GameOutcome, IllegalMove, Mark, MinimaxOpponent, Move, Opponent, Position, Square,
    classify,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for the human.
    HumanToMove,
    /// The computer is choosing its reply.
    AutomatedToMove,
    /// The game is over; only a restart is accepted.
    Terminal,
}

/// What happened during one accepted human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TurnReport {
    /// Where the human played.
    human_move: Position,
    /// The computer's reply, if the game was still going.
    computer_move: Option<Position>,
    /// Outcome after both moves.
    outcome: GameOutcome,
}

/// A single human-versus-computer game.
#[derive(Debug, Clone)]
pub struct GameSession<O = MinimaxOpponent> {
    board: Board,
    state: TurnState,
    history: Vec<Move>,
    opponent: O,
}

impl GameSession<MinimaxOpponent> {
    /// Creates a session against the minimax opponent.
    pub fn new() -> Self {
        Self::with_opponent(MinimaxOpponent)
    }
}

impl Default for GameSession<MinimaxOpponent> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Opponent> GameSession<O> {
    /// Creates a session with an empty board and the human to move.
    pub fn with_opponent(opponent: O) -> Self {
        Self {
            board: Board::new(),
            state: TurnState::HumanToMove,
            history: Vec::new(),
            opponent,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whose turn it is.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the opponent.
    pub fn opponent(&self) -> &O {
        &self.opponent
    }

    /// Returns the outcome, derived from the board.
    ///
    /// A session that ended because the opponent had no move reads as a
    /// draw even though the board itself is not decided.
    pub fn outcome(&self) -> GameOutcome {
        match (classify(&self.board), self.state) {
            (GameOutcome::InProgress, TurnState::Terminal) => GameOutcome::Draw,
            (outcome, _) => outcome,
        }
    }

    /// Submits a human move at zero-based `row` and `col`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] and leaves the session untouched if it is
    /// not the human's turn, the coordinates are off the board, or the
    /// square is taken.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn submit_human_move(&mut self, row: usize, col: usize) -> Result<TurnReport, IllegalMove> {
        self.ensure_human_turn()?;
        let pos = Position::from_row_col(row, col).ok_or_else(|| {
            warn!(row, col, "Rejected move off the board");
            IllegalMove::OutOfRange { row, col }
        })?;
        self.submit_human_position(pos)
    }

    /// Submits a human move at `pos`.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::submit_human_move`], minus the range check.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn submit_human_position(&mut self, pos: Position) -> Result<TurnReport, IllegalMove> {
        self.ensure_human_turn()?;
        if !self.board.is_empty(pos) {
            warn!(position = %pos, "Rejected move on occupied square");
            return Err(IllegalMove::Occupied(pos));
        }

        self.place(Move::new(Mark::HUMAN, pos));

        let computer_move = if self.state == TurnState::AutomatedToMove {
            self.play_automated_turn()
        } else {
            None
        };

        let report = TurnReport {
            human_move: pos,
            computer_move,
            outcome: self.outcome(),
        };
        debug!(?report, "Turn complete");
        Ok(report)
    }

    /// Clears the board and hands the first move back to the human.
    ///
    /// Accepted from any state.
    #[instrument(skip(self), fields(state = ?self.state, moves = self.history.len()))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.board = Board::new();
        self.state = TurnState::HumanToMove;
        self.history.clear();
    }

    /// Checks the board and history against the session invariants.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        SessionInvariants::check_all(self)
    }

    fn ensure_human_turn(&self) -> Result<(), IllegalMove> {
        match self.state {
            TurnState::HumanToMove => Ok(()),
            TurnState::AutomatedToMove => {
                warn!("Rejected move while the computer is to move");
                Err(IllegalMove::NotHumansTurn)
            }
            TurnState::Terminal => {
                warn!("Rejected move after the game ended");
                Err(IllegalMove::GameOver)
            }
        }
    }

    fn play_automated_turn(&mut self) -> Option<Position> {
        match self.opponent.choose_move(&self.board) {
            Some(pos) if self.board.is_empty(pos) => {
                self.place(Move::new(Mark::COMPUTER, pos));
                Some(pos)
            }
            Some(pos) => {
                error!(
                    opponent = self.opponent.name(),
                    position = %pos,
                    "Opponent chose an occupied square, ending game"
                );
                self.state = TurnState::Terminal;
                None
            }
            None => {
                warn!(
                    opponent = self.opponent.name(),
                    "Opponent had no move, ending game"
                );
                self.state = TurnState::Terminal;
                None
            }
        }
    }

    fn place(&mut self, mv: Move) {
        self.board.set(mv.position, Square::Occupied(mv.mark));
        self.history.push(mv);

        let outcome = classify(&self.board);
        self.state = if outcome.is_terminal() {
            info!(%outcome, "Game over");
            TurnState::Terminal
        } else if mv.mark == Mark::HUMAN {
            TurnState::AutomatedToMove
        } else {
            TurnState::HumanToMove
        };
        debug!(%mv, state = ?self.state, "Move applied");

        let checked = self.check_invariants();
        if let Err(violations) = &checked {
            warn!(?violations, "Session invariants violated");
        }
        debug_assert!(checked.is_ok(), "Session invariants violated");
    }
}
