//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the session can share them.

pub mod draw;
pub mod moves;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::legal_moves;
pub use outcome::{GameOutcome, classify};
pub use win::{LINES, check_winner, is_winner};
