//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Symbol drawn for the human's mark.
    #[serde(default = "default_human_symbol")]
    human_symbol: char,

    /// Symbol drawn for the computer's mark.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: char,

    /// Symbol drawn for an empty square.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: char,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_symbol() -> char {
    'X'
}

fn default_computer_symbol() -> char {
    'O'
}

fn default_empty_symbol() -> char {
    '.'
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl GameConfig {
    /// Creates a configuration with default symbols.
    pub fn new() -> Self {
        Self {
            human_symbol: default_human_symbol(),
            computer_symbol: default_computer_symbol(),
            empty_symbol: default_empty_symbol(),
            log_filter: default_log_filter(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or returns defaults when no path
    /// is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::new()),
        }
    }

    /// Checks that the three board symbols can be told apart.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let symbols = [self.human_symbol, self.computer_symbol, self.empty_symbol];
        if symbols[0] == symbols[1] || symbols[0] == symbols[2] || symbols[1] == symbols[2] {
            return Err(ConfigError::new(format!(
                "Board symbols must be distinct, got {:?}",
                symbols
            )));
        }
        if symbols.iter().any(|c| c.is_whitespace() || *c == '|') {
            return Err(ConfigError::new(
                "Board symbols cannot be whitespace or '|'".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.human_symbol(), 'X');
        assert_eq!(*config.computer_symbol(), 'O');
        assert_eq!(*config.empty_symbol(), '.');
        assert_eq!(config.log_filter(), "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human_symbol = \"#\"").unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.human_symbol(), '#');
        assert_eq!(*config.computer_symbol(), 'O');
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human_symbol = \"O\"").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("distinct"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(GameConfig::load(None).unwrap(), GameConfig::new());
    }
}
