//! Exhaustive check that an opponent never loses.
//!
//! Every sequence of legal human moves is played against a fresh session.
//! The opponent is deterministic, so this covers every game the human can
//! force.

use crate::games::tictactoe::{GameOutcome, Mark, MinimaxOpponent, Opponent, legal_moves};
use crate::session::{GameSession, TurnState};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Tally of finished games by outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AuditReport {
    /// Games that reached a terminal state.
    games: u64,
    /// Games the computer won.
    computer_wins: u64,
    /// Games the human won.
    human_wins: u64,
    /// Drawn games.
    draws: u64,
}

impl AuditReport {
    /// True when no human strategy beat the opponent.
    pub fn is_unbeaten(&self) -> bool {
        self.human_wins == 0
    }

    /// Turns the report into a pass or fail.
    ///
    /// # Errors
    ///
    /// Returns [`AuditFailure`] if any human strategy won.
    pub fn ensure_unbeaten(&self) -> Result<(), AuditFailure> {
        if self.is_unbeaten() {
            Ok(())
        } else {
            Err(AuditFailure {
                human_wins: self.human_wins,
                games: self.games,
            })
        }
    }

    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Mark::HUMAN) => self.human_wins += 1,
            GameOutcome::Win(_) => self.computer_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            // A terminal session never classifies as in progress.
            GameOutcome::InProgress => {}
        }
    }
}

/// An audited opponent lost at least one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("The human won {} of {} games", human_wins, games)]
pub struct AuditFailure {
    /// Games the human won.
    pub human_wins: u64,
    /// Games played.
    pub games: u64,
}

impl std::error::Error for AuditFailure {}

/// Audits the minimax opponent.
pub fn audit() -> AuditReport {
    audit_opponent(MinimaxOpponent)
}

/// Plays every human strategy against `opponent`.
#[instrument(skip(opponent), fields(opponent = opponent.name()))]
pub fn audit_opponent<O: Opponent + Clone>(opponent: O) -> AuditReport {
    let mut report = AuditReport::default();
    walk(&GameSession::with_opponent(opponent), &mut report);

    if report.is_unbeaten() {
        info!(?report, "Audit complete");
    } else {
        warn!(?report, "Audit found human wins");
    }
    report
}

fn walk<O: Opponent + Clone>(session: &GameSession<O>, report: &mut AuditReport) {
    if session.state() == TurnState::Terminal {
        report.record(session.outcome());
        return;
    }

    for pos in legal_moves(session.board()) {
        let mut next = session.clone();
        if next.submit_human_position(pos).is_ok() {
            walk(&next, report);
        }
    }
}
