//! Compact text notation for boards.
//!
//! Nine cells in row-major order: `X` or `O` (any case) for markers and
//! `.`, `-` or `_` for empty squares. Row separators `/` and `|` and any
//! whitespace are skipped, so `"XXX/OO./..."` and `"XXXOO...."` are equal.

use super::{BOARD_SIZE, Board, Player, Square};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Failure to read a board from text.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
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

fn is_separator(c: char) -> bool {
    c == '/' || c == '|' || c.is_whitespace()
}

impl FromStr for Board {
    type Err = BoardParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; BOARD_SIZE];
        let mut count = 0;

        for (offset, c) in s.char_indices() {
            if is_separator(c) {
                continue;
            }
            let square = match c {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected character {:?} at offset {}",
                        other, offset
                    )));
                }
            };
            if count == BOARD_SIZE {
                return Err(BoardParseError::new(format!(
                    "too many cells: expected {}",
                    BOARD_SIZE
                )));
            }
            squares[count] = square;
            count += 1;
        }

        if count != BOARD_SIZE {
            return Err(BoardParseError::new(format!(
                "expected {} cells, found {}",
                BOARD_SIZE, count
            )));
        }

        debug!("Board parsed");
        Ok(Board::from_squares(squares))
    }
}

impl Board {
    /// Writes the board in compact notation, rows separated by `/`.
    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE + 2);
        for (index, square) in self.squares().iter().enumerate() {
            if index > 0 && index % 3 == 0 {
                out.push('/');
            }
            out.push(match square {
                Square::Empty => '.',
                Square::Occupied(player) => match player {
                    Player::X => 'X',
                    Player::O => 'O',
                },
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exercise_default() {
        let board: Board = "....../O.X".parse().unwrap();
        assert_eq!(board, Board::exercise_default());
    }

    #[test]
    fn test_separators_and_case() {
        let a: Board = "xxx/oo_/---".parse().unwrap();
        let b: Board = "XXX | OO. | ...".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_notation(), "XXX/OO./...");
    }

    #[test]
    fn test_wrong_length() {
        let err = "XXOO".parse::<Board>().unwrap_err();
        assert!(err.message.contains("found 4"));
        let err = "XOXOXOXOXO".parse::<Board>().unwrap_err();
        assert!(err.message.contains("too many"));
    }

    #[test]
    fn test_unknown_character() {
        let err = "XO?......".parse::<Board>().unwrap_err();
        assert!(err.message.contains("'?'"));
        assert!(err.message.contains("offset 2"));
    }
}
