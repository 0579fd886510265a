use equation::{
    backspace, is_fun_answer, row_characters, score_guess, valid_equation, CellStatus,
    EquationRow, KeyStatuses, Operator,
};
use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::key_input::{self, next_char_is_an_operator, KeyInput};
use crate::keyboard::keyboard_rows;
use crate::settings::GameSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A submitted row together with how it compares to the answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub row: EquationRow,
    pub statuses: [CellStatus; 4],
}

impl Guess {
    pub fn is_correct(&self) -> bool {
        self.statuses.iter().all(|v| *v == CellStatus::Green)
    }
}

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key doesn't do anything right now
    Ignored,
    /// The current row changed
    Edited,
    Submitted(GameStatus),
    Rejected(SubmitError),
}

/// The state of one game: the row that is being typed, and the rows that have been submitted.
pub struct GuessEditor {
    settings: GameSettings,
    answer: EquationRow,
    /// Row that is being typed
    current: EquationRow,
    guesses: Vec<Guess>,
    key_statuses: KeyStatuses,
    status: GameStatus,
}

impl GuessEditor {
    pub fn new(answer: EquationRow, settings: GameSettings) -> Self {
        if !valid_equation(&answer) {
            log::warn!("The answer {} is not a valid equation", answer);
        } else if !is_fun_answer(&answer) {
            log::warn!("The answer {} is too easy", answer);
        }
        Self {
            settings,
            answer,
            current: EquationRow::new(),
            guesses: Vec::new(),
            key_statuses: KeyStatuses::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn current_row(&self) -> &EquationRow {
        &self.current
    }

    pub fn current_characters(&self) -> [String; 6] {
        row_characters(&self.current)
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn key_statuses(&self) -> &KeyStatuses {
        &self.key_statuses
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_disabled(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn next_char_is_an_operator(&self) -> bool {
        next_char_is_an_operator(&self.current)
    }

    pub fn keyboard_rows(&self) -> Vec<Vec<char>> {
        keyboard_rows(
            self.next_char_is_an_operator(),
            &self.settings.valid_operators,
        )
    }

    /// Dispatches a key press.
    /// Characters are only accepted when they are what the keyboard currently shows.
    pub fn handle_key(&mut self, key: KeyInput) -> KeyOutcome {
        if self.game_disabled() {
            log::trace!("Ignoring {:?}, the game is over", key);
            return KeyOutcome::Ignored;
        }

        match key {
            KeyInput::Enter => match self.on_enter_press() {
                Ok(status) => KeyOutcome::Submitted(status),
                Err(error) => KeyOutcome::Rejected(error),
            },
            KeyInput::Delete => {
                if self.on_delete_press() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            KeyInput::Char(c) => {
                if self.is_expected_char(c) && self.add_letter(c) {
                    KeyOutcome::Edited
                } else {
                    log::trace!("Ignoring {:?} for {}", c, self.current);
                    KeyOutcome::Ignored
                }
            }
        }
    }

    fn is_expected_char(&self, c: char) -> bool {
        if self.next_char_is_an_operator() {
            Operator::try_from(c).is_ok_and(|operator| self.settings.is_valid_operator(operator))
        } else {
            key_input::digit_value(c).is_some()
        }
    }

    /// Appends a character to the current row. Returns whether it was used.
    /// Operators that the settings leave out are never used.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if self.game_disabled() {
            return false;
        }
        if let Ok(operator) = Operator::try_from(letter) {
            if !self.settings.is_valid_operator(operator) {
                return false;
            }
        }
        key_input::add_letter(&mut self.current, letter)
    }

    /// Removes the last field of the current row. Returns whether anything was removed.
    pub fn on_delete_press(&mut self) -> bool {
        if self.game_disabled() || self.current.is_empty() {
            return false;
        }
        self.current = backspace(std::mem::take(&mut self.current));
        true
    }

    /// Submits the current row.
    pub fn on_enter_press(&mut self) -> Result<GameStatus, SubmitError> {
        if self.game_disabled() {
            return Err(SubmitError::GameOver);
        }
        if !self.current.is_complete() {
            return Err(SubmitError::IncompleteEquation);
        }
        if !valid_equation(&self.current) {
            log::debug!("Rejected {}", self.current);
            return Err(SubmitError::NotAValidEquation(self.current.clone()));
        }

        let row = std::mem::take(&mut self.current);
        let statuses = score_guess(&row, &self.answer);
        self.key_statuses.add_guess(&row, &statuses);
        let guess = Guess { row, statuses };
        log::debug!("Submitted {} with {:?}", guess.row, guess.statuses);

        self.status = if guess.is_correct() {
            GameStatus::Won
        } else if self.guesses.len() + 1 >= self.settings.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        self.guesses.push(guess);
        Ok(self.status)
    }
}
