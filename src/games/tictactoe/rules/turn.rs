//! Turn inference for tic-tac-toe.

use super::super::{Board, Player};
use tracing::instrument;

/// Counts the squares that hold a marker.
#[instrument]
pub fn filled_count(board: &Board) -> usize {
    board.squares().iter().filter(|s| !s.is_empty()).count()
}

/// Infers whose move is next from the number of markers on the board.
///
/// X opens, so an even count means X moves and an odd count means O moves.
/// Alternation is assumed, not verified.
#[instrument]
pub fn next_player(board: &Board) -> Player {
    if filled_count(board) % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_x_moves() {
        assert_eq!(next_player(&Board::new()), Player::X);
    }

    #[test]
    fn test_parity_over_fill_counts() {
        let mut board = Board::new();
        for k in 0..9 {
            let expected = if k % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(filled_count(&board), k);
            assert_eq!(next_player(&board), expected, "after {k} markers");
            board = board.with(k, next_player(&board));
        }
    }

    #[test]
    fn test_exercise_default_is_x_to_move() {
        assert_eq!(next_player(&Board::exercise_default()), Player::X);
    }

    #[test]
    fn test_counts_markers_not_owners() {
        // Two X markers and nothing else still reads as X to move.
        let board = Board::new().with(0, Player::X).with(1, Player::X);
        assert_eq!(next_player(&board), Player::X);
    }
}
