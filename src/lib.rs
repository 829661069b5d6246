//! Strictly Tic-Tac-Toe Status - pure board evaluation
//!
//! Given a 3x3 snapshot, this library infers whose turn is next, detects a
//! completed line, and composes the status line a UI would show.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe_status::{Board, PlayerNames, next_player, status};
//!
//! let board: Board = "....../O.X".parse().unwrap();
//! let names = PlayerNames::default();
//! let next = next_player(&board);
//! assert_eq!(status(&board, &names.turn_description(next)), "Player X's turn (X)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, BoardParseError, GameStatus, MIN_NAME_LEN, Player, PlayerNameError,
    PlayerNames, Square, StatusMessages, WINNER_PLACEHOLDER, WINNING_LINES, WinningLine,
    check_winner, evaluate, filled_count, find_winner, is_draw, is_full, next_player, status,
    status_with,
};
