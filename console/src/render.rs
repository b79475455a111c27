use tictactoe_engine::tictactoe::{Board, CELL_COUNT};

use crate::config::GameConfig;

const ROW_SEPARATOR: &str = "-----------";

pub fn render_board(board: &Board, config: &GameConfig) -> String {
    let mut out = String::from("\n");
    for cell in 0..CELL_COUNT {
        out.push(' ');
        out.push(config.symbol_for(board[cell]));
        if cell % 3 != 2 {
            out.push_str(" |");
        } else if cell != CELL_COUNT - 1 {
            out.push('\n');
            out.push_str(ROW_SEPARATOR);
            out.push('\n');
        }
    }
    out.push_str("\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::tictactoe::Mark;

    #[test]
    fn test_empty_board_rendering() {
        let rendered = render_board(&Board::new(), &GameConfig::default());
        assert_eq!(
            rendered,
            "\n   |   |  \n-----------\n   |   |  \n-----------\n   |   |  \n\n"
        );
    }

    #[test]
    fn test_marks_use_configured_symbols() {
        let mut board = Board::new();
        board[0] = Mark::Human;
        board[4] = Mark::Ai;
        board[8] = Mark::Human;

        let rendered = render_board(&board, &GameConfig::default());
        assert_eq!(
            rendered,
            "\n X |   |  \n-----------\n   | O |  \n-----------\n   |   | X\n\n"
        );

        let config = GameConfig {
            human_symbol: '#',
            ai_symbol: '@',
            ..GameConfig::default()
        };
        assert!(render_board(&board, &config).contains(" # |   |  \n"));
        assert!(render_board(&board, &config).contains("   | @ |  \n"));
    }
}
