mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, get_available_moves, is_valid_move};
pub use bot_controller::{best_move, minimax};
pub use game_state::GameEngine;
pub use types::{FirstPlayer, Mark, Outcome, WinningLine};
pub use win_detector::{WINNING_TRIPLES, check_winner, check_winner_with_line, is_full};
