//! Line-oriented terminal front end.
//!
//! Reads commands from any `BufRead`, drives a [`GameSession`], and draws the
//! board to any `Write`. All game decisions stay in the session.

use crate::config::GameConfig;
use crate::games::tictactoe::{GameOutcome, Mark, Position};
use crate::session::{GameSession, TurnState};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const HELP: &str = "\
Enter a move as a square number 1-9 (left to right, top to bottom),
as zero-based \"row col\" coordinates, or as a label such as \"center\".
  r  restart    q  quit    h  help";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play at zero-based row and column.
    Move {
        /// Row.
        row: usize,
        /// Column.
        col: usize,
    },
    /// Start a new game.
    Restart,
    /// Print the help text.
    Help,
    /// Leave.
    Quit,
}

impl ConsoleCommand {
    /// Parses one line of input. Returns `None` for unrecognised input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Some(Self::Quit),
            "r" | "restart" => return Some(Self::Restart),
            "h" | "help" | "?" => return Some(Self::Help),
            _ => {}
        }

        let numbers: Vec<usize> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(str::parse::<usize>)
            .collect::<Result<_, _>>()
            .unwrap_or_default();

        let pos = match numbers.as_slice() {
            [row, col] => return Some(Self::Move { row: *row, col: *col }),
            [n @ 1..=9] => Position::from_index(n - 1),
            _ => Position::from_label(line),
        }?;

        Some(Self::Move {
            row: pos.row(),
            col: pos.col(),
        })
    }
}

/// Interactive game over a reader and a writer.
pub struct Console<R, W> {
    session: GameSession,
    config: GameConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with a fresh session.
    pub fn new(config: GameConfig, input: R, output: W) -> Self {
        Self {
            session: GameSession::new(),
            config,
            input,
            output,
        }
    }

    /// Returns the session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs until the user quits or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}\n", HELP)?;
        self.draw()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                return Ok(());
            }

            match ConsoleCommand::parse(&line) {
                Some(ConsoleCommand::Quit) => return Ok(()),
                Some(ConsoleCommand::Help) => writeln!(self.output, "{}", HELP)?,
                Some(ConsoleCommand::Restart) => {
                    self.session.restart();
                    self.draw()?;
                }
                Some(ConsoleCommand::Move { row, col }) => {
                    match self.session.submit_human_move(row, col) {
                        Ok(report) => {
                            if let Some(reply) = report.computer_move() {
                                writeln!(self.output, "Computer plays {}", reply)?;
                            }
                            self.draw()?;
                        }
                        Err(e) => writeln!(self.output, "{}", e)?,
                    }
                }
                None => writeln!(self.output, "Unrecognised input, type h for help")?,
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let board = self.session.board().render(
            *self.config.human_symbol(),
            *self.config.computer_symbol(),
            *self.config.empty_symbol(),
        );
        writeln!(self.output, "{}\n", board)?;

        let status = match (self.session.state(), self.session.outcome()) {
            (TurnState::Terminal, GameOutcome::Win(Mark::HUMAN)) => {
                "You win! Type r to play again.".to_string()
            }
            (TurnState::Terminal, GameOutcome::Win(_)) => {
                "Computer wins! Type r to play again.".to_string()
            }
            (TurnState::Terminal, _) => "It's a draw! Type r to play again.".to_string(),
            _ => format!("Your move ({}).", self.config.human_symbol()),
        };
        writeln!(self.output, "{}", status)?;
        Ok(())
    }
}
