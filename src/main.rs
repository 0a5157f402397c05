//! Strictly Minimax - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::fmt::Write as _;
use std::io;
use std::path::Path;
use strictly_minimax::{
    AuditReport, Board, ConfigError, Console, GameConfig, SearchResult, audit, minimax,
};
use tracing::{Subscriber, info, instrument};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // The config names the log filter, so loading it logs through RUST_LOG only
    let provisional = subscriber(EnvFilter::from_default_env(), io::stderr);
    let config = load_config_with(provisional, cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    subscriber(filter, io::stderr).init();
    info!(path = ?cli.config, "Configuration ready");

    match cli.command {
        Command::Play => run_play(config),
        Command::BestMove { board, json } => run_best_move(&board, json),
        Command::Audit { json } => run_audit(json),
    }
}

/// Build the fmt subscriber used for all logging
fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

/// Load the config with `subscriber` collecting its log events
fn load_config_with<S>(subscriber: S, path: Option<&Path>) -> Result<GameConfig, ConfigError>
where
    S: Subscriber + Send + Sync + 'static,
{
    tracing::subscriber::with_default(subscriber, || GameConfig::load(path))
}

/// Run the interactive console game
fn run_play(config: GameConfig) -> Result<()> {
    info!("Starting console game");
    let stdin = io::stdin();
    let mut console = Console::new(config, stdin.lock(), io::stdout());
    console.run()
}

/// Print the best move for a board
fn run_best_move(board: &str, json: bool) -> Result<()> {
    println!("{}", render_best_move(board, json)?);
    Ok(())
}

/// Analyze a board given as text and format the result
#[instrument]
fn render_best_move(board: &str, json: bool) -> Result<String> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let result: SearchResult = minimax::analyze(&board);

    if json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }

    let mut out = format!("{}\n\n", board);
    match result.best_move() {
        Some(pos) => writeln!(
            out,
            "Best move: {} (row {}, col {})",
            pos,
            pos.row(),
            pos.col()
        )?,
        None => writeln!(out, "Best move: none (board is full)")?,
    }
    writeln!(out, "Score: {}", result.score())?;
    write!(out, "Positions searched: {}", result.nodes())?;
    Ok(out)
}

/// Run the exhaustive audit
fn run_audit(json: bool) -> Result<()> {
    let report = audit();
    println!("{}", render_audit(&report, json)?);
    report.ensure_unbeaten()?;
    Ok(())
}

/// Format an audit report
fn render_audit(report: &AuditReport, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    Ok(format!(
        "Games: {}\nComputer wins: {}\nDraws: {}\nHuman wins: {}",
        report.games(),
        report.computer_wins(),
        report.draws(),
        report.human_wins()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use strictly_minimax::{Opponent, Position, audit_opponent, legal_moves};

    /// Log sink shared between the subscriber and the test.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Plays the first empty square.
    #[derive(Debug, Clone, Copy)]
    struct FirstAvailable;

    impl Opponent for FirstAvailable {
        fn choose_move(&mut self, board: &Board) -> Option<Position> {
            legal_moves(board).first().copied()
        }

        fn name(&self) -> &str {
            "FirstAvailable"
        }
    }

    #[test]
    fn test_config_loading_is_logged() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "empty_symbol = \"_\"").unwrap();

        let buf = SharedBuf::default();
        let sink = buf.clone();
        let config = load_config_with(
            subscriber(EnvFilter::new("debug"), move || sink.clone()),
            Some(file.path()),
        )
        .unwrap();

        assert_eq!(*config.empty_symbol(), '_');
        let logs = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("Loading config from file"), "{}", logs);
        assert!(logs.contains("Config loaded successfully"), "{}", logs);
    }

    #[test]
    fn test_best_move_text() {
        let out = render_best_move("XX. .O. ...", false).unwrap();
        assert!(out.contains("Best move: Top-right (row 0, col 2)"), "{}", out);
        assert!(out.contains("Score: 0"), "{}", out);
    }

    #[test]
    fn test_best_move_json() {
        let out = render_best_move("XX. .O. ...", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["best_move"], "TopRight");
        assert_eq!(value["score"], 0);
    }

    #[test]
    fn test_best_move_full_board() {
        let out = render_best_move("XOX OXX OXO", false).unwrap();
        assert!(out.contains("Best move: none (board is full)"), "{}", out);
    }

    #[test]
    fn test_best_move_rejects_bad_board() {
        let err = render_best_move("XX- -O- ---", false).unwrap_err();
        assert!(err.to_string().starts_with("Invalid board"), "{}", err);
    }

    #[test]
    fn test_beaten_audit_is_an_error() {
        let report = audit_opponent(FirstAvailable);
        let out = render_audit(&report, false).unwrap();
        assert!(out.contains(&format!("Human wins: {}", report.human_wins())));

        let err = anyhow::Error::from(report.ensure_unbeaten().unwrap_err());
        assert!(err.to_string().starts_with("The human won "), "{}", err);
    }

    #[test]
    fn test_audit_json_has_tallies() {
        let out = render_audit(&AuditReport::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["human_wins"], 0);
        assert_eq!(value["games"], 0);
    }
}
