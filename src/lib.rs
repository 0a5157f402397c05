//! Strictly Minimax - tic-tac-toe against exhaustive minimax search
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a `Copy` board (legal moves, wins, draws)
//! - **Minimax**: unpruned full-depth search choosing the computer's move
//! - **Session**: turn controller that owns the board and alternates turns
//! - **Audit**: plays every human strategy to show the computer never loses
//! - **Console**: line-oriented terminal front end
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{GameSession, TurnState};
//!
//! let mut session = GameSession::new();
//! let report = session.submit_human_move(1, 1).unwrap();
//! assert!(report.computer_move().is_some_and(|pos| pos.is_corner()));
//! assert_eq!(session.state(), TurnState::HumanToMove);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod audit;
mod config;
mod console;
mod games;
mod session;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, GameOutcome, IllegalMove, Mark, MinimaxOpponent, Move, Opponent,
    Position, SearchResult, Square, classify, evaluate, invariants, is_full, is_winner,
    legal_moves, minimax, rules, select_move,
};

// Crate-level exports - Session management
pub use session::{GameSession, TurnReport, TurnState};

// Crate-level exports - Audit
pub use audit::{AuditFailure, AuditReport, audit, audit_opponent};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console front end
pub use console::{Console, ConsoleCommand};
