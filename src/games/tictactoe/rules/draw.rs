//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}

/// Checks if the board is full and nobody has three in a row.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Square};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with(4, Player::X);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_squares([Square::Occupied(Player::X); 9]);
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use crate::games::tictactoe::Player::{O, X};
        // X O X / O X X / O X O
        #[rustfmt::skip]
        let board = Board::from([
            Some(X), Some(O), Some(X),
            Some(O), Some(X), Some(X),
            Some(O), Some(X), Some(O),
        ]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use crate::games::tictactoe::Player::{O, X};
        // X X X / O O X / X O O
        #[rustfmt::skip]
        let board = Board::from([
            Some(X), Some(X), Some(X),
            Some(O), Some(O), Some(X),
            Some(X), Some(O), Some(O),
        ]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
