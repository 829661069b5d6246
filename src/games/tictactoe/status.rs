//! Turn and status evaluation.
//!
//! Every call classifies the snapshot it is given from scratch. There is no
//! session object; callers hold the board and apply moves themselves.

use super::rules::{find_winner, is_full, next_player};
use super::{Board, Player, WinningLine};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Placeholder replaced by the winner's marker in [`StatusMessages::win`].
pub const WINNER_PLACEHOLDER: &str = "{winner}";

/// Classification of a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A player owns a complete line.
    Won {
        /// The winner.
        player: Player,
        /// The first complete line in catalogue order.
        line: WinningLine,
    },
    /// Board full without a winner.
    Draw,
}

impl GameStatus {
    /// Won and Draw are terminal; no further move is meaningful.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// The winning line, for highlighting.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Classifies a board: winner first, then a full board, else in progress.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((player, line)) = find_winner(board) {
        GameStatus::Won { player, line }
    } else if is_full(board) {
        debug!("Board full without a winner");
        GameStatus::Draw
    } else {
        GameStatus::InProgress {
            next: next_player(board),
        }
    }
}

/// Templates for the terminal status lines.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct StatusMessages {
    /// Win template; `{winner}` is replaced by the marker.
    #[serde(default = "default_win")]
    win: String,
    /// Draw message.
    #[serde(default = "default_draw")]
    draw: String,
}

fn default_win() -> String {
    format!("Winner: {}", WINNER_PLACEHOLDER)
}

fn default_draw() -> String {
    "Scratch: Cat's game".to_string()
}

impl StatusMessages {
    /// Creates custom templates.
    pub fn new(win: impl Into<String>, draw: impl Into<String>) -> Self {
        Self {
            win: win.into(),
            draw: draw.into(),
        }
    }

    /// Renders the win line for `player`.
    pub fn win_message(&self, player: Player) -> String {
        self.win.replace(WINNER_PLACEHOLDER, player.marker())
    }
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self {
            win: default_win(),
            draw: default_draw(),
        }
    }
}

/// Composes the status line with the default messages.
///
/// `next_player_description` is returned verbatim while the game is in
/// progress, so callers can embed a display name in it.
#[instrument(skip(next_player_description))]
pub fn status(board: &Board, next_player_description: &str) -> String {
    status_with(board, next_player_description, &StatusMessages::default())
}

/// Composes the status line with caller-supplied messages.
#[instrument(skip(next_player_description, messages))]
pub fn status_with(
    board: &Board,
    next_player_description: &str,
    messages: &StatusMessages,
) -> String {
    match evaluate(board) {
        GameStatus::Won { player, .. } => messages.win_message(player),
        GameStatus::Draw => messages.draw().clone(),
        GameStatus::InProgress { .. } => next_player_description.to_string(),
    }
}
