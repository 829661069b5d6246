//! Strictly Tic-Tac-Toe Status - CLI
//!
//! Evaluates a board snapshot and prints its status line.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use strictly_tictactoe_status::{
    AppConfig, Board, GameStatus, Player, WINNING_LINES, evaluate, next_player, status_with,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Status {
            board,
            x_name,
            o_name,
            json,
        } => {
            let config = AppConfig::resolve(cli.config.as_deref(), x_name, o_name)?;
            run_status(config, board, json)
        }
        Command::Lines => {
            run_lines();
            Ok(())
        }
    }
}

/// JSON report for a single evaluation.
#[derive(Debug, Serialize)]
struct Report {
    board: Board,
    next_player: Player,
    outcome: GameStatus,
    status: String,
}

/// Evaluate one board and print the result
#[instrument(skip(config))]
fn run_status(config: AppConfig, board: Option<String>, json: bool) -> Result<()> {
    let board = match board {
        Some(text) => text.parse::<Board>()?,
        None => Board::exercise_default(),
    };
    debug!(%board, "Evaluating board");

    let next = next_player(&board);
    let description = config.players().turn_description(next);
    let line = status_with(&board, &description, config.messages());
    let outcome = evaluate(&board);
    info!(?outcome, "Board evaluated");

    if json {
        let report = Report {
            board,
            next_player: next,
            outcome,
            status: line,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", board);
        println!();
        println!("{}", line);
    }

    Ok(())
}

/// Print the winning-line catalogue
fn run_lines() {
    for line in WINNING_LINES {
        let [a, b, c] = line.indices();
        println!("{} {} {}", a, b, c);
    }
}
