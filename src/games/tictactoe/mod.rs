//! Tic-tac-toe: board, rules, and the minimax opponent.

mod action;
pub mod invariants;
pub mod minimax;
mod opponent;
mod position;
pub mod rules;
mod types;

pub use action::{IllegalMove, Move};
pub use minimax::{SearchResult, evaluate, select_move};
pub use opponent::{MinimaxOpponent, Opponent};
pub use position::Position;
pub use rules::{GameOutcome, classify, is_full, is_winner, legal_moves};
pub use types::{Board, BoardParseError, Mark, Square};
