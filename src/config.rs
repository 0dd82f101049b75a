//! Configuration for the terminal shell.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Rendering and logging settings for the terminal shell.
///
/// Every key is optional in the TOML file; missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Symbol drawn for the player's marks.
    #[serde(default = "default_player_symbol")]
    player_symbol: char,

    /// Symbol drawn for the computer's marks.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: char,

    /// Whether to print the computer's reply after each move.
    #[serde(default = "default_announce_computer_moves")]
    announce_computer_moves: bool,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player_symbol() -> char {
    'X'
}

fn default_computer_symbol() -> char {
    'O'
}

fn default_announce_computer_moves() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl ShellConfig {
    /// Creates a configuration with custom symbols and default settings.
    ///
    /// # Errors
    ///
    /// Fails if the symbols are invalid (see [`ShellConfig::validate`]).
    #[instrument]
    pub fn with_symbols(player_symbol: char, computer_symbol: char) -> Result<Self, ConfigError> {
        let config = Self {
            player_symbol,
            computer_symbol,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player_symbol = %config.player_symbol,
            computer_symbol = %config.computer_symbol,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the symbols can be told apart on the rendered board.
    ///
    /// Empty cells are drawn as their keypad number, so symbols must not be
    /// digits or whitespace, and the two sides must differ.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for symbol in [self.player_symbol, self.computer_symbol] {
            if symbol.is_ascii_digit() || symbol.is_whitespace() {
                return Err(ConfigError::new(format!(
                    "Symbol {:?} would be confused with an empty cell",
                    symbol
                )));
            }
        }
        if self.player_symbol == self.computer_symbol {
            return Err(ConfigError::new(format!(
                "Player and computer share the symbol {:?}",
                self.player_symbol
            )));
        }
        Ok(())
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            player_symbol: default_player_symbol(),
            computer_symbol: default_computer_symbol(),
            announce_computer_moves: default_announce_computer_moves(),
            log_filter: default_log_filter(),
        }
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
        let config = ShellConfig::default();
        assert_eq!(*config.player_symbol(), 'X');
        assert_eq!(*config.computer_symbol(), 'O');
        assert!(*config.announce_computer_moves());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ShellConfig::from_toml("").unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = ShellConfig::from_toml("player_symbol = \"@\"\nannounce_computer_moves = false\n")
            .unwrap();
        assert_eq!(*config.player_symbol(), '@');
        assert_eq!(*config.computer_symbol(), 'O');
        assert!(!*config.announce_computer_moves());
    }

    #[test]
    fn test_rejects_digit_symbol() {
        let err = ShellConfig::from_toml("computer_symbol = \"5\"").unwrap_err();
        assert!(err.message.contains("empty cell"));
    }

    #[test]
    fn test_rejects_shared_symbol() {
        let err = ShellConfig::with_symbols('#', '#').unwrap_err();
        assert!(err.message.contains("share"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = ShellConfig::from_toml("player_symbol = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "computer_symbol = \"*\"").unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();

        let config = ShellConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.computer_symbol(), '*');
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }
}
