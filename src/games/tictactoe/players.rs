//! Display names for the two players.

use super::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Shortest name accepted for a player.
pub const MIN_NAME_LEN: usize = 2;

/// Maps each marker to the name shown in status lines.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name of the X player.
    #[serde(default = "default_x")]
    x: String,
    /// Name of the O player.
    #[serde(default = "default_o")]
    o: String,
}

fn default_x() -> String {
    "Player X".to_string()
}

fn default_o() -> String {
    "Player O".to_string()
}

impl PlayerNames {
    /// Creates a name mapping, rejecting names shorter than [`MIN_NAME_LEN`].
    #[instrument(skip(x, o))]
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Result<Self, PlayerNameError> {
        let names = Self {
            x: x.into(),
            o: o.into(),
        };
        names.validate()?;
        Ok(names)
    }

    /// Checks both names against [`MIN_NAME_LEN`].
    pub fn validate(&self) -> Result<(), PlayerNameError> {
        for player in Player::iter() {
            let name = self.name(player);
            if name.trim().chars().count() < MIN_NAME_LEN {
                return Err(PlayerNameError::new(format!(
                    "name for {} must be at least {} characters, got {:?}",
                    player, MIN_NAME_LEN, name
                )));
            }
        }
        Ok(())
    }

    /// Looks up the name for a marker.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Formats the in-progress status line, e.g. `Player X's turn (X)`.
    #[instrument(skip(self))]
    pub fn turn_description(&self, player: Player) -> String {
        format!("{}'s turn ({})", self.name(player), player.marker())
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            x: default_x(),
            o: default_o(),
        }
    }
}

/// Rejected player name.
#[derive(Debug, Clone, Display, Error)]
#[display("Player name error: {} at {}:{}", message, file, line)]
pub struct PlayerNameError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PlayerNameError {
    /// Creates a new player name error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
