//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square, WINNING_LINES, WinningLine};
use tracing::{debug, instrument};

/// Finds the first line owned entirely by one player.
///
/// Lines are scanned in catalogue order (rows, columns, diagonals), so a
/// malformed board with several complete lines reports the earliest one.
#[instrument]
pub fn find_winner(board: &Board) -> Option<(Player, WinningLine)> {
    for line in WINNING_LINES {
        let [a, b, c] = line.indices();
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            debug!(%player, ?line, "Winning line found");
            return Some((player, line));
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winner(board).map(|(player, _)| player)
}
