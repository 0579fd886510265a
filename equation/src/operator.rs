use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The binary operators a player can put between the two operands.
/// There are exactly six of them, and the serialized form is the symbol itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    /// Exponentiation, `a ^ b` is a to the power of b
    #[serde(rename = "^")]
    Power,
    #[serde(rename = "%")]
    Modulo,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operator \"{0}\"")]
pub struct UnknownOperator(pub String);

impl Operator {
    /// In the order in which they show up on the keyboard
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
        Operator::Modulo,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
            Operator::Modulo => '%',
        }
    }

    /// Evaluates `a <operator> b`.
    ///
    /// Returns `None` whenever the result is not an integer or not defined:
    /// division by zero, inexact division, negative exponents, overflow,
    /// and modulo with a zero divisor or negative operands.
    pub fn apply(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Operator::Add => a.checked_add(b),
            Operator::Subtract => a.checked_sub(b),
            Operator::Multiply => a.checked_mul(b),
            Operator::Divide => {
                if b == 0 || a.checked_rem(b)? != 0 {
                    None
                } else {
                    a.checked_div(b)
                }
            }
            Operator::Power => {
                let exponent = u32::try_from(b).ok()?;
                a.checked_pow(exponent)
            }
            Operator::Modulo => {
                // No sign convention is assumed for negative operands
                if a < 0 || b <= 0 {
                    None
                } else {
                    a.checked_rem(b)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = UnknownOperator;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Operator::ALL
            .into_iter()
            .find(|operator| operator.symbol() == value)
            .ok_or_else(|| UnknownOperator(value.to_string()))
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::try_from(c),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}
