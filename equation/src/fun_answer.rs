use crate::operator::Operator;
use crate::row::EquationRow;

/// A shape of equation that can be solved without doing any arithmetic.
/// Only the operands and the operator are looked at, never the result.
pub struct BoringPattern {
    pub name: &'static str,
    pub matches: fn(i64, Operator, i64) -> bool,
}

impl std::fmt::Debug for BoringPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BoringPattern").field(&self.name).finish()
    }
}

/// Every pattern is checked independently, an equation is boring if any of them matches.
/// New operators get new entries here instead of changing the existing ones.
pub static BORING_PATTERNS: &[BoringPattern] = &[
    // a + 0 = a, 0 + b = b
    BoringPattern {
        name: "additive identity",
        matches: |a, operator, b| operator == Operator::Add && (a == 0 || b == 0),
    },
    // a - 0 = a
    BoringPattern {
        name: "subtractive identity",
        matches: |_, operator, b| operator == Operator::Subtract && b == 0,
    },
    // a * 1, 1 * b, a / 1, a ^ 1
    BoringPattern {
        name: "multiplicative identity",
        matches: |a, operator, b| match operator {
            Operator::Multiply => a == 1 || b == 1,
            Operator::Divide | Operator::Power => b == 1,
            _ => false,
        },
    },
    BoringPattern {
        name: "zero product",
        matches: |a, operator, b| operator == Operator::Multiply && (a == 0 || b == 0),
    },
    // 0 / b, 0 ^ b, 0 % b
    BoringPattern {
        name: "zero dividend",
        matches: |a, operator, _| {
            a == 0 && matches!(operator, Operator::Divide | Operator::Power | Operator::Modulo)
        },
    },
    // a % 1 = 0
    BoringPattern {
        name: "remainder of one",
        matches: |_, operator, b| operator == Operator::Modulo && b == 1,
    },
    // a ^ 0 = 1
    BoringPattern {
        name: "zero exponent",
        matches: |_, operator, b| operator == Operator::Power && b == 0,
    },
    // 1 ^ b = 1
    BoringPattern {
        name: "power of one",
        matches: |a, operator, _| operator == Operator::Power && a == 1,
    },
    // a / a = 1
    BoringPattern {
        name: "self division",
        matches: |a, operator, b| operator == Operator::Divide && a == b,
    },
];

/// The first boring pattern that the row matches.
/// Rows without both operands and an operator don't have a shape and match nothing.
pub fn boring_pattern(row: &EquationRow) -> Option<&'static BoringPattern> {
    let (a, operator, b) = (row.operand_a?, row.operator?, row.operand_b?);
    BORING_PATTERNS
        .iter()
        .find(|pattern| (pattern.matches)(a, operator, b))
}

/// Whether a valid equation is worth being the answer of the day.
/// Assumes that the row already is a valid equation, an incomplete row is never fun.
pub fn is_fun_answer(row: &EquationRow) -> bool {
    if !row.is_complete() {
        return false;
    }
    match boring_pattern(row) {
        Some(pattern) => {
            log::trace!("{} is not fun, it is a {}", row, pattern.name);
            false
        }
        None => true,
    }
}
