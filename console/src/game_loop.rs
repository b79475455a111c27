use std::io::{self, BufRead, Write};
use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{CELL_COUNT, FirstPlayer, GameEngine, Mark, Outcome};

use crate::config::GameConfig;
use crate::input::TokenReader;
use crate::render::render_board;

const FIRST_PLAYER_PROMPT: &str = "Who should go first? (H for Human, A for AI): ";
const MOVE_PROMPT: &str = "Enter your move (1-9): ";
const INVALID_MOVE: &str = "Invalid move. Try again.";

/// Plays one game over the given streams.
///
/// Returns `Ok(None)` if the input runs out before the game is decided.
pub fn run_game<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &GameConfig,
) -> io::Result<Option<Outcome>> {
    let mut tokens = TokenReader::new(input);

    writeln!(output, "Welcome to Tic Tac Toe!")?;
    writeln!(
        output,
        "You are {}, AI is {}.",
        config.human_symbol, config.ai_symbol
    )?;

    let first_player = match config.first_player {
        Some(first_player) => first_player,
        None => {
            write!(output, "{}", FIRST_PLAYER_PROMPT)?;
            output.flush()?;
            match tokens.next_char()? {
                Some(answer) => FirstPlayer::from_answer(answer),
                None => {
                    log!("Input closed before choosing the first player");
                    return Ok(None);
                }
            }
        }
    };
    log!("First player: {:?}", first_player);

    let mut engine = GameEngine::new(first_player);
    write!(output, "{}", render_board(engine.board(), config))?;

    while !engine.is_over() {
        if engine.current_turn() == Mark::Human {
            write!(output, "{}", MOVE_PROMPT)?;
            output.flush()?;

            let Some(token) = tokens.next_token()? else {
                log!("Input closed mid-game");
                return Ok(None);
            };

            let placed = parse_move(&token).and_then(|cell| {
                engine.place_human_mark(cell)?;
                Ok(cell)
            });
            match placed {
                Ok(cell) => log!("Human marked cell {}", cell + 1),
                Err(reason) => {
                    log!("Rejected move {:?}: {}", token, reason);
                    writeln!(output, "{}", INVALID_MOVE)?;
                    continue;
                }
            }
        } else {
            let cell = engine.play_ai_move().map_err(io::Error::other)?;
            log!("AI marked cell {}", cell + 1);
            if config.announce_ai_move {
                writeln!(output, "AI chooses position {}", cell + 1)?;
            }
        }

        write!(output, "{}", render_board(engine.board(), config))?;
    }

    let outcome = engine.outcome();
    if let Some(line) = engine.winning_line() {
        log!("Winning line: {:?}", line.cells.map(|cell| cell + 1));
    }
    log!("Game over: {:?}", outcome);
    writeln!(output, "{}", outcome_message(outcome))?;
    output.flush()?;
    Ok(Some(outcome))
}

/// Turns a 1-based console answer into a cell index.
fn parse_move(token: &str) -> Result<usize, String> {
    let position: i64 = token
        .parse()
        .map_err(|_| format!("'{}' is not a number", token))?;
    if !(1..=CELL_COUNT as i64).contains(&position) {
        return Err(format!("Position {} is outside 1-{}", position, CELL_COUNT));
    }
    Ok(position as usize - 1)
}

fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::HumanWin => "You win!",
        Outcome::AiWin => "AI wins!",
        Outcome::Draw => "Draw!",
        Outcome::Ongoing => "Game in progress",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(input: &str, config: &GameConfig) -> (Option<Outcome>, String) {
        let mut output = Vec::new();
        let outcome = run_game(Cursor::new(input), &mut output, config).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_move_accepts_one_through_nine() {
        assert_eq!(parse_move("1"), Ok(0));
        assert_eq!(parse_move("9"), Ok(8));
        assert!(parse_move("0").is_err());
        assert!(parse_move("10").is_err());
        assert!(parse_move("-3").is_err());
        assert!(parse_move("five").is_err());
    }

    #[test]
    fn test_ai_first_wins_against_careless_human() {
        let (outcome, output) = play("a\n2\n3\n", &GameConfig::default());

        assert_eq!(outcome, Some(Outcome::AiWin));
        assert!(output.starts_with("Welcome to Tic Tac Toe!\nYou are X, AI is O.\n"));
        assert!(output.contains(FIRST_PLAYER_PROMPT));
        assert!(output.contains("AI chooses position 1\n"));
        assert!(output.contains("AI chooses position 4\n"));
        assert!(output.contains("AI chooses position 7\n"));
        assert!(output.ends_with("AI wins!\n"));
        assert!(output.contains("\n O | X | X\n-----------\n O |   |  \n-----------\n O |   |  \n\n"));
    }

    #[test]
    fn test_invalid_moves_reprompt_without_changing_the_game() {
        let (outcome, output) = play("A\n1\n0\n10\nfoo\n2\n3\n", &GameConfig::default());

        assert_eq!(outcome, Some(Outcome::AiWin));
        assert_eq!(output.matches(INVALID_MOVE).count(), 4);
        assert_eq!(output.matches(MOVE_PROMPT).count(), 6);
        assert_eq!(output.matches("AI chooses position").count(), 3);
    }

    #[test]
    fn test_perfect_human_play_ends_in_draw() {
        let (outcome, output) = play("H\n1\n2\n7\n6\n9\n", &GameConfig::default());

        assert_eq!(outcome, Some(Outcome::Draw));
        assert!(output.ends_with(
            "\n X | X | O\n-----------\n O | O | X\n-----------\n X | O | X\n\nDraw!\n"
        ));
    }

    #[test]
    fn test_lowercase_h_lets_human_start() {
        let (outcome, output) = play("h\n", &GameConfig::default());

        assert_eq!(outcome, None);
        assert!(output.ends_with(MOVE_PROMPT));
        assert!(!output.contains("AI chooses position"));
    }

    #[test]
    fn test_characters_after_first_player_answer_are_the_first_move() {
        let (outcome, output) = play("h5\n", &GameConfig::default());

        assert_eq!(outcome, None);
        assert_eq!(output.matches(MOVE_PROMPT).count(), 2);
        assert!(!output.contains(INVALID_MOVE));
        assert!(output.contains("\n   |   |  \n-----------\n   | X |  \n"));
        assert!(output.contains("AI chooses position 1\n"));
    }

    #[test]
    fn test_empty_input_exits_cleanly() {
        let (outcome, output) = play("", &GameConfig::default());

        assert_eq!(outcome, None);
        assert!(output.ends_with(FIRST_PLAYER_PROMPT));
    }

    #[test]
    fn test_configured_first_player_skips_prompt() {
        let config = GameConfig {
            first_player: Some(FirstPlayer::Ai),
            announce_ai_move: false,
            ..GameConfig::default()
        };
        let (outcome, output) = play("2 3", &config);

        assert_eq!(outcome, Some(Outcome::AiWin));
        assert!(!output.contains(FIRST_PLAYER_PROMPT));
        assert!(!output.contains("AI chooses position"));
    }
}
