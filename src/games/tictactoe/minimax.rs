//! Exhaustive minimax search for the automated player.
//!
//! Scores are always from the computer's point of view: `+1` when the
//! computer wins, `-1` when the human wins, `0` for a draw. The search is
//! unpruned and always runs to the end of the game; a 3x3 board bounds the
//! depth at nine plies.
//!
//! Each recursive frame owns its [`Board`] value. Hypothetical placements
//! are made on a copy, so sibling branches never observe each other and the
//! caller's board is never touched.

use super::rules::{is_full, is_winner, legal_moves};
use super::{Board, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Value of a position for the computer.
pub type Score = i8;

/// Score of a position the computer has won.
pub const COMPUTER_WIN: Score = 1;

/// Score of a position the human has won.
pub const HUMAN_WIN: Score = -1;

/// Score of a drawn position.
pub const DRAW: Score = 0;

/// Result of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchResult {
    /// Value of the position with the computer to move.
    score: Score,
    /// Best move for the computer, or `None` if the board is full.
    best_move: Option<Position>,
    /// Number of positions visited.
    nodes: u64,
}

/// Minimax value of `board`.
///
/// `maximizing` selects the side to move: the computer (`O`) when true,
/// the human (`X`) when false. Terminal boards score the same whichever
/// side is to move.
pub fn evaluate(board: Board, maximizing: bool) -> Score {
    Search::default().evaluate(board, maximizing)
}

/// Picks the computer's move on `board`.
///
/// Candidates are tried in row-major order and the incumbent is only
/// replaced by a strictly better score, so ties go to the earliest square.
/// Returns `None` if there are no empty squares.
pub fn select_move(board: &Board) -> Option<Position> {
    analyze(board).best_move
}

/// Runs a full search for the computer and reports the best move, its
/// score, and how many positions were visited.
#[instrument(skip(board), fields(occupied = board.occupied()))]
pub fn analyze(board: &Board) -> SearchResult {
    let mut search = Search::default();
    let mut best: Option<(Position, Score)> = None;

    for pos in legal_moves(board) {
        let score = search.evaluate(board.with(pos, Mark::COMPUTER), false);
        if best.is_none_or(|(_, incumbent)| score > incumbent) {
            best = Some((pos, score));
        }
    }

    let result = match best {
        Some((pos, score)) => SearchResult {
            score,
            best_move: Some(pos),
            nodes: search.nodes,
        },
        None => SearchResult {
            score: search.evaluate(*board, true),
            best_move: None,
            nodes: search.nodes,
        },
    };

    debug!(
        best_move = ?result.best_move,
        score = result.score,
        nodes = result.nodes,
        "Search complete"
    );
    result
}

/// Per-search bookkeeping.
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    fn evaluate(&mut self, board: Board, maximizing: bool) -> Score {
        self.nodes += 1;

        if is_winner(&board, Mark::COMPUTER) {
            return COMPUTER_WIN;
        }
        if is_winner(&board, Mark::HUMAN) {
            return HUMAN_WIN;
        }
        if is_full(&board) {
            return DRAW;
        }

        let mark = if maximizing { Mark::COMPUTER } else { Mark::HUMAN };
        let scores = legal_moves(&board)
            .into_iter()
            .map(|pos| self.evaluate(board.with(pos, mark), !maximizing));

        // A non-full board always has at least one child.
        if maximizing {
            scores.max().unwrap_or(DRAW)
        } else {
            scores.min().unwrap_or(DRAW)
        }
    }
}
