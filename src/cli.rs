//! Command-line interface for strictly_tictactoe_status.

use clap::{Parser, Subcommand};

/// Strictly Tic-Tac-Toe - evaluate board snapshots
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe_status")]
#[command(about = "Infer the next player and status line for a tic-tac-toe board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config with player names and messages
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the status line for a board
    Status {
        /// Board in compact notation, e.g. "XXX/OO./..." (defaults to the exercise board)
        #[arg(short, long)]
        board: Option<String>,

        /// Display name for X
        #[arg(long)]
        x_name: Option<String>,

        /// Display name for O
        #[arg(long)]
        o_name: Option<String>,

        /// Emit a JSON report instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List the winning lines in catalogue order
    Lines,
}
