//! Configuration for player names and status messages.

use crate::games::tictactoe::{PlayerNames, StatusMessages};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Application configuration, usually read from TOML.
///
/// ```toml
/// [players]
/// x = "Ada"
/// o = "Grace"
///
/// [messages]
/// win = "{winner} wins!"
/// draw = "Cat's game"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display names for the two markers.
    #[serde(default)]
    players: PlayerNames,

    /// Terminal status templates.
    #[serde(default)]
    messages: StatusMessages,
}

impl AppConfig {
    /// Creates a configuration from its parts.
    pub fn new(players: PlayerNames, messages: StatusMessages) -> Self {
        Self { players, messages }
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config
            .players
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid player names: {}", e.message)))?;

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(x = %config.players.x(), o = %config.players.o(), "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration.
    ///
    /// Explicit names win over the config file, which wins over the defaults.
    #[instrument]
    pub fn resolve(
        path: Option<&Path>,
        x: Option<String>,
        o: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_names(x, o)
    }

    /// Replaces either player name, keeping the other.
    #[instrument(skip(self))]
    pub fn with_names(self, x: Option<String>, o: Option<String>) -> Result<Self, ConfigError> {
        let players = PlayerNames::new(
            x.unwrap_or_else(|| self.players.x().clone()),
            o.unwrap_or_else(|| self.players.o().clone()),
        )
        .map_err(|e| ConfigError::new(format!("Invalid player names: {}", e.message)))?;
        Ok(Self { players, ..self })
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
