use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    Human,
    Ai,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::Human => Some(Mark::Ai),
            Mark::Ai => Some(Mark::Human),
            Mark::Empty => None,
        }
    }

    pub fn default_symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::Human => 'X',
            Mark::Ai => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    HumanWin,
    AiWin,
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Ai,
}

impl FirstPlayer {
    /// Anything other than `h`/`H` hands the first move to the AI.
    pub fn from_answer(answer: char) -> Self {
        match answer.to_ascii_uppercase() {
            'H' => FirstPlayer::Human,
            _ => FirstPlayer::Ai,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            FirstPlayer::Human => Mark::Human,
            FirstPlayer::Ai => Mark::Ai,
        }
    }
}

/// The triple that decided the game, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_swaps_sides() {
        assert_eq!(Mark::Human.opponent(), Some(Mark::Ai));
        assert_eq!(Mark::Ai.opponent(), Some(Mark::Human));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_first_player_answer_is_case_insensitive() {
        assert_eq!(FirstPlayer::from_answer('H'), FirstPlayer::Human);
        assert_eq!(FirstPlayer::from_answer('h'), FirstPlayer::Human);
    }

    #[test]
    fn test_first_player_anything_else_is_ai() {
        assert_eq!(FirstPlayer::from_answer('A'), FirstPlayer::Ai);
        assert_eq!(FirstPlayer::from_answer('x'), FirstPlayer::Ai);
        assert_eq!(FirstPlayer::from_answer('1'), FirstPlayer::Ai);
    }
}
