//! The rules of an equation guessing puzzle.
//! A row is `operand_a operator operand_b = result`, and everything in here is a pure function of a row.

pub mod cell_status;
pub mod fun_answer;
pub mod operator;
pub mod row;
pub mod row_characters;
pub mod row_macros;
pub mod validation;

pub use cell_status::{score_guess, CellStatus, KeyStatuses};
pub use fun_answer::{boring_pattern, is_fun_answer, BoringPattern, BORING_PATTERNS};
pub use operator::Operator;
pub use row::{backspace, EquationRow, RowField};
pub use row_characters::row_characters;
pub use validation::{valid_equation, RESULT_RANGE};
