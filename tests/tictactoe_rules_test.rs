//! Tests for win detection and turn inference through the public API.

use strictly_tictactoe_status::{
    Board, Player, Square, WINNING_LINES, WinningLine, check_winner, filled_count, find_winner,
    next_player,
};

/// Every board obtained by filling the six squares off `line` with each of
/// Empty, X and O.
fn fills_around(line: WinningLine, player: Player) -> Vec<Board> {
    let others: Vec<usize> = (0..9).filter(|i| !line.contains(*i)).collect();
    let options = [Square::Empty, Square::Occupied(Player::X), Square::Occupied(Player::O)];
    let mut boards = Vec::new();
    for code in 0..3usize.pow(others.len() as u32) {
        let mut board = line
            .indices()
            .into_iter()
            .fold(Board::new(), |b, i| b.with(i, player));
        let mut rest = code;
        for &index in &others {
            board = board.with(index, options[rest % 3]);
            rest /= 3;
        }
        boards.push(board);
    }
    boards
}

fn is_complete(board: &Board, line: WinningLine) -> bool {
    let [a, b, c] = line.indices();
    !board.get(a).is_empty() && board.get(a) == board.get(b) && board.get(b) == board.get(c)
}

#[test]
fn test_each_line_reported_exactly() {
    for line in WINNING_LINES {
        for player in [Player::X, Player::O] {
            for board in fills_around(line, player) {
                let other_complete = WINNING_LINES
                    .iter()
                    .any(|other| *other != line && is_complete(&board, *other));
                if other_complete {
                    continue;
                }
                assert_eq!(find_winner(&board), Some((player, line)), "{board}");
            }
        }
    }
}

#[test]
fn test_next_player_follows_parity() {
    for line in WINNING_LINES {
        for board in fills_around(line, Player::X) {
            let k = filled_count(&board);
            let expected = if k % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(next_player(&board), expected);
        }
    }
}

#[test]
fn test_exercise_board_is_x_to_move() {
    #[rustfmt::skip]
    let board = Board::from([
        None, None, None,
        None, None, None,
        Some(Player::O), None, Some(Player::X),
    ]);
    assert_eq!(next_player(&board), Player::X);
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_top_row_example() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    let (player, line) = find_winner(&board).unwrap();
    assert_eq!(player, Player::X);
    assert_eq!(line.indices(), [0, 1, 2]);
}

#[test]
fn test_calls_are_repeatable() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    assert_eq!(find_winner(&board), find_winner(&board));
    assert_eq!(next_player(&board), next_player(&board));
}
