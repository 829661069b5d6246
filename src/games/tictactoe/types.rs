//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// The marker drawn on the board for this player.
    pub fn marker(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// A square on the tic-tac-toe board.
///
/// Serializes as `null`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Player>", into = "Option<Player>")]
pub enum Square {
    /// Unplayed square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks whether nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

impl From<Option<Player>> for Square {
    fn from(value: Option<Player>) -> Self {
        value.map_or(Square::Empty, Square::Occupied)
    }
}

impl From<Square> for Option<Player> {
    fn from(square: Square) -> Self {
        square.player()
    }
}

impl From<Player> for Square {
    fn from(player: Player) -> Self {
        Square::Occupied(player)
    }
}

/// Number of squares on a board.
pub const BOARD_SIZE: usize = 9;

/// 3x3 tic-tac-toe board snapshot.
///
/// The fixed-size array makes the length-9 invariant a property of the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// The starting position used by the exercise pages: O bottom-left, X bottom-right.
    #[instrument]
    pub fn exercise_default() -> Self {
        let mut board = Self::new();
        board.squares[6] = Square::Occupied(Player::O);
        board.squares[8] = Square::Occupied(Player::X);
        board
    }

    /// Gets the square at the given index (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn get(&self, index: usize) -> Square {
        self.squares[index]
    }

    /// Returns a copy of this board with `square` placed at `index`.
    ///
    /// No legality check is made; the engine only classifies snapshots.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn with(mut self, index: usize, square: impl Into<Square>) -> Self {
        self.squares[index] = square.into();
        self
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }
}

impl From<[Square; BOARD_SIZE]> for Board {
    fn from(squares: [Square; BOARD_SIZE]) -> Self {
        Self::from_squares(squares)
    }
}

impl From<[Option<Player>; BOARD_SIZE]> for Board {
    fn from(values: [Option<Player>; BOARD_SIZE]) -> Self {
        Self::from_squares(values.map(Square::from))
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with empty squares numbered 1-9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => f.write_str(player.marker())?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Three board indices that win when owned by a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    /// The line's indices.
    pub const fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Checks whether the square at `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// All winning lines: rows top to bottom, columns left to right, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    // Columns
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    // Diagonals
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];
