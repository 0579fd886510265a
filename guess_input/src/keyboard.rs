use equation::Operator;

use crate::key_input::NUMBERS;

/// The rows of the on-screen keyboard.
/// It either shows operators, three per row, or the digits split over two rows.
pub fn keyboard_rows(
    next_char_is_an_operator: bool,
    valid_operators: &[Operator],
) -> Vec<Vec<char>> {
    if next_char_is_an_operator {
        let operators: Vec<char> = valid_operators.iter().map(|v| v.symbol()).collect();
        let split = operators.len().min(3);
        vec![operators[..split].to_vec(), operators[split..].to_vec()]
    } else {
        vec![NUMBERS[..6].to_vec(), NUMBERS[6..].to_vec()]
    }
}
