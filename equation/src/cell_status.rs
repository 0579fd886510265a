use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::row::{EquationRow, RowField};

/// How close a guessed cell is to the answer
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum CellStatus {
    /// Nothing is known yet
    #[default]
    Unguessed,
    /// Not part of the answer
    Gray,
    /// Part of the answer, but in a different cell
    Yellow,
    /// Exactly right
    Green,
}

/// Compares the fields of a guess with the fields of the answer, Wordle style.
///
/// Fields are compared by their text. Every answer field can only make one guessed field yellow,
/// and green matches are handed out first.
/// The statuses are in [`RowField::ALL`] order.
pub fn score_guess(guess: &EquationRow, answer: &EquationRow) -> [CellStatus; 4] {
    let guess_texts = RowField::ALL.map(|field| guess.field_text(field));
    let answer_texts = RowField::ALL.map(|field| answer.field_text(field));

    let mut statuses = [CellStatus::Unguessed; 4];
    let mut unmatched: Vec<&str> = Vec::new();
    for (i, (guessed, expected)) in guess_texts.iter().zip(answer_texts.iter()).enumerate() {
        match (guessed, expected) {
            (Some(guessed), Some(expected)) if guessed == expected => {
                statuses[i] = CellStatus::Green;
            }
            (_, Some(expected)) => unmatched.push(expected),
            (_, None) => {}
        }
    }

    for (i, guessed) in guess_texts.iter().enumerate() {
        let Some(guessed) = guessed else {
            continue;
        };
        if statuses[i] == CellStatus::Green {
            continue;
        }
        statuses[i] = match unmatched.iter().position(|expected| *expected == guessed.as_str()) {
            Some(index) => {
                unmatched.swap_remove(index);
                CellStatus::Yellow
            }
            None => CellStatus::Gray,
        };
    }
    statuses
}

/// The best status that each keyboard key has reached over all guesses so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStatuses {
    statuses: HashMap<char, CellStatus>,
}

impl KeyStatuses {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, key: char) -> CellStatus {
        self.statuses.get(&key).copied().unwrap_or_default()
    }

    /// Records a scored guess. A multi digit field updates every one of its digits.
    pub fn add_guess(&mut self, guess: &EquationRow, statuses: &[CellStatus; 4]) {
        for (field, status) in RowField::ALL.iter().zip(statuses) {
            let Some(text) = guess.field_text(*field) else {
                continue;
            };
            for key in text.chars() {
                let entry = self.statuses.entry(key).or_default();
                *entry = (*entry).max(*status);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, CellStatus)> + '_ {
        self.statuses.iter().map(|(key, status)| (*key, *status))
    }
}
