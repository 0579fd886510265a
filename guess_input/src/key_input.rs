use equation::{EquationRow, Operator};
use serde::{Deserialize, Serialize};

/// The digit keys, in keyboard order
pub const NUMBERS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// A single key press, either from a physical keyboard or from the on-screen one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyInput {
    Enter,
    Delete,
    Char(char),
}

impl KeyInput {
    /// Takes a key name like `"Enter"`, `"Backspace"` or `"7"`.
    /// Keys that are neither a single character nor a control key are `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.to_uppercase();
        match key.as_str() {
            "ENTER" => Some(KeyInput::Enter),
            "BACKSPACE" => Some(KeyInput::Delete),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(KeyInput::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

/// After the first operand, the keyboard switches to operators until one has been entered.
pub fn next_char_is_an_operator(row: &EquationRow) -> bool {
    row.operand_a.is_some() && row.operator.is_none()
}

pub fn digit_value(c: char) -> Option<i64> {
    if NUMBERS.contains(&c) {
        c.to_digit(10).map(i64::from)
    } else {
        None
    }
}

/// Appends a typed character to the row.
///
/// Both operands are single digits, the result can have up to two digits.
/// Returns whether the character was used.
pub fn add_letter(row: &mut EquationRow, letter: char) -> bool {
    if let Some(digit) = digit_value(letter) {
        return add_digit(row, digit);
    }
    match Operator::try_from(letter) {
        Ok(operator) if next_char_is_an_operator(row) => {
            row.operator = Some(operator);
            true
        }
        _ => false,
    }
}

fn add_digit(row: &mut EquationRow, digit: i64) -> bool {
    if row.operand_a.is_none() {
        row.operand_a = Some(digit);
    } else if row.operator.is_none() {
        return false;
    } else if row.operand_b.is_none() {
        row.operand_b = Some(digit);
    } else {
        match row.result {
            None => row.result = Some(digit),
            // A leading zero is a complete result
            Some(result) if result > 0 && result < 10 => row.result = Some(result * 10 + digit),
            Some(_) => return false,
        }
    }
    true
}
