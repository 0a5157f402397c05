//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Minimax - tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play,

    /// Print the computer's best move for a board
    BestMove {
        /// Nine cells in row-major order, e.g. "XX. .O. ..."
        board: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play every human strategy against the computer and report the results
    Audit {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
