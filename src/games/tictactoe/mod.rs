//! Tic-tac-toe board evaluation.

mod notation;
mod players;
pub mod rules;
mod status;
mod types;

pub use notation::BoardParseError;
pub use players::{MIN_NAME_LEN, PlayerNameError, PlayerNames};
pub use rules::{check_winner, filled_count, find_winner, is_draw, is_full, next_player};
pub use status::{GameStatus, StatusMessages, WINNER_PLACEHOLDER, evaluate, status, status_with};
pub use types::{BOARD_SIZE, Board, Player, Square, WINNING_LINES, WinningLine};
