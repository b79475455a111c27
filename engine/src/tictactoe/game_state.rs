use super::board::{Board, CELL_COUNT, is_valid_move};
use super::bot_controller::best_move;
use super::types::{FirstPlayer, Mark, Outcome, WinningLine};
use super::win_detector::{check_winner_with_line, is_full};

/// Owns the single board of a human-vs-AI game and enforces turn order.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_turn: Mark,
    outcome: Outcome,
}

impl GameEngine {
    pub fn new(first_player: FirstPlayer) -> Self {
        Self {
            board: Board::new(),
            current_turn: first_player.mark(),
            outcome: Outcome::Ongoing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_winner_with_line(&self.board)
    }

    /// Applies the human's move. A rejected move leaves the game unchanged.
    pub fn place_human_mark(&mut self, cell: usize) -> Result<(), String> {
        self.ensure_turn(Mark::Human)?;

        if !is_valid_move(&self.board, cell) {
            return Err(if cell >= CELL_COUNT {
                format!("Cell {} is out of range", cell)
            } else {
                format!("Cell {} is already marked", cell)
            });
        }

        self.apply(cell, Mark::Human);
        Ok(())
    }

    /// Lets the AI pick and play its move, returning the chosen cell.
    pub fn play_ai_move(&mut self) -> Result<usize, String> {
        self.ensure_turn(Mark::Ai)?;

        let cell = best_move(&self.board).ok_or_else(|| "No empty cell left".to_string())?;
        self.apply(cell, Mark::Ai);
        Ok(cell)
    }

    fn ensure_turn(&self, mark: Mark) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }
        if self.current_turn != mark {
            return Err("Not your turn".to_string());
        }
        Ok(())
    }

    fn apply(&mut self, cell: usize, mark: Mark) {
        self.board[cell] = mark;

        self.check_game_over();

        if self.outcome == Outcome::Ongoing {
            self.switch_turn();
        }
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_turn.opponent() {
            self.current_turn = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_winner_with_line(&self.board) {
            self.outcome = match line.mark {
                Mark::Human => Outcome::HumanWin,
                Mark::Ai => Outcome::AiWin,
                Mark::Empty => Outcome::Ongoing,
            };
            return;
        }

        if is_full(&self.board) {
            self.outcome = Outcome::Draw;
        }
    }
}
