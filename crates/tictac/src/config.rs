//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictac_board::Symbol;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictac.toml";

/// Front-end configuration.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player marks. The first one moves first.
    #[serde(default = "default_symbols")]
    symbols: [String; 2],

    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_symbols() -> [String; 2] {
    ["X".to_string(), "O".to_string()]
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictac.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbols: default_symbols(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(symbols = ?config.symbols, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the config to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Player symbols as board symbols.
    pub fn player_symbols(&self) -> [Symbol; 2] {
        [
            Symbol::new(self.symbols[0].clone()),
            Symbol::new(self.symbols[1].clone()),
        ]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let [first, second] = &self.symbols;
        if first.trim().is_empty() || second.trim().is_empty() {
            return Err(ConfigError::new("Symbols must not be empty".to_string()));
        }
        if first == second {
            return Err(ConfigError::new(format!(
                "Symbols must differ, both are {:?}",
                first
            )));
        }
        Ok(())
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
    #[instrument(skip(message))]
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

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").expect("empty config is valid");
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.player_symbols()[0].as_str(), "X");
    }

    #[test]
    fn test_custom_symbols() {
        let config = GameConfig::from_toml(r#"symbols = ["A", "B"]"#).expect("valid config");
        assert_eq!(config.symbols(), &["A".to_string(), "B".to_string()]);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let err = GameConfig::from_toml(r#"symbols = ["X", "X"]"#).unwrap_err();
        assert!(err.message.contains("differ"));
    }

    #[test]
    fn test_blank_symbol_rejected() {
        let err = GameConfig::from_toml(r#"symbols = ["X", " "]"#).unwrap_err();
        assert!(err.message.contains("empty"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = GameConfig::from_toml("symbols = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
