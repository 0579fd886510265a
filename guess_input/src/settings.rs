use equation::Operator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// How many rows the player can submit before the game is lost
    pub max_guesses: usize,
    /// Operators that show up on the keyboard and are accepted as input.
    /// Some puzzles only use a few of them.
    pub valid_operators: Vec<Operator>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSettings {
    pub fn new() -> Self {
        GameSettings {
            max_guesses: 6,
            valid_operators: Operator::ALL.to_vec(),
        }
    }

    pub fn is_valid_operator(&self, operator: Operator) -> bool {
        self.valid_operators.contains(&operator)
    }
}
