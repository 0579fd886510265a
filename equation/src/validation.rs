use std::ops::RangeInclusive;

use crate::row::EquationRow;

/// The result cell has room for two digits and no sign.
pub const RESULT_RANGE: RangeInclusive<i64> = 0..=99;

/// Evaluates the left hand side of a row.
/// `None` if a part of it is missing or the arithmetic is undefined.
pub fn expected_result(row: &EquationRow) -> Option<i64> {
    row.operator?.apply(row.operand_a?, row.operand_b?)
}

/// Checks that a row is a complete, correct equation whose result fits into the result cell.
/// Partial rows are never valid.
pub fn valid_equation(row: &EquationRow) -> bool {
    match (expected_result(row), row.result) {
        (Some(expected), Some(result)) => expected == result && RESULT_RANGE.contains(&expected),
        _ => false,
    }
}
