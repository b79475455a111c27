use super::board::Board;
use super::types::{Mark, WinningLine};

/// Rows, then columns, then diagonals. The first match wins.
pub const WINNING_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_winner(board: &Board) -> Mark {
    check_winner_with_line(board).map_or(Mark::Empty, |line| line.mark)
}

pub fn check_winner_with_line(board: &Board) -> Option<WinningLine> {
    WINNING_TRIPLES.iter().find_map(|&[a, b, c]| {
        let mark = board[a];
        if mark != Mark::Empty && mark == board[b] && mark == board[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Mark::Empty)
}
