use super::board::{Board, CELL_COUNT, get_available_moves};
use super::types::Mark;
use super::win_detector::{check_winner, is_full};

const WIN_SCORE: i32 = 10;

/// Exhaustive minimax from the AI's point of view.
///
/// Wins are worth `10 - depth` and losses `depth - 10`, so a quick win beats a
/// slow one and a slow loss beats a quick one. Every cell placed during the
/// search is reset before returning, leaving `board` untouched.
pub fn minimax(board: &mut Board, is_maximizing: bool, depth: i32) -> i32 {
    match check_winner(board) {
        Mark::Ai => return WIN_SCORE - depth,
        Mark::Human => return depth - WIN_SCORE,
        Mark::Empty => {}
    }

    if is_full(board) {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for cell in 0..CELL_COUNT {
            if board[cell] != Mark::Empty {
                continue;
            }
            board[cell] = Mark::Ai;
            let eval = minimax(board, false, depth + 1);
            board[cell] = Mark::Empty;

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for cell in 0..CELL_COUNT {
            if board[cell] != Mark::Empty {
                continue;
            }
            board[cell] = Mark::Human;
            let eval = minimax(board, true, depth + 1);
            board[cell] = Mark::Empty;

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

/// Picks the AI's move. Ties go to the lowest cell index.
///
/// Returns `None` only when no empty cell is left.
pub fn best_move(board: &Board) -> Option<usize> {
    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for cell in get_available_moves(&board) {
        board[cell] = Mark::Ai;
        let score = minimax(&mut board, false, 0);
        board[cell] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move
}
