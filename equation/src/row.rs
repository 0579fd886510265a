use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operator::Operator;

/// One equation slot of the puzzle grid, `operand_a operator operand_b = result`.
///
/// Every field is filled in separately, so every field is optional.
/// The player fills them from left to right, but nothing here relies on that:
/// a field counts as present when it is `Some`, regardless of the other fields.
/// A present `0` is still present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
#[serde(rename_all = "camelCase")]
pub struct EquationRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "wasm", tsify(optional))]
    pub operand_a: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "wasm", tsify(optional))]
    pub operator: Option<Operator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "wasm", tsify(optional))]
    pub operand_b: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "wasm", tsify(optional))]
    pub result: Option<i64>,
}

/// The fields of a row, in the order in which they get filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum RowField {
    OperandA,
    Operator,
    OperandB,
    Result,
}

impl RowField {
    pub const ALL: [RowField; 4] = [
        RowField::OperandA,
        RowField::Operator,
        RowField::OperandB,
        RowField::Result,
    ];
}

impl EquationRow {
    pub fn new() -> Self {
        Default::default()
    }

    /// A fully filled in row
    pub fn complete(operand_a: i64, operator: Operator, operand_b: i64, result: i64) -> Self {
        EquationRow {
            operand_a: Some(operand_a),
            operator: Some(operator),
            operand_b: Some(operand_b),
            result: Some(result),
        }
    }

    pub fn is_present(&self, field: RowField) -> bool {
        match field {
            RowField::OperandA => self.operand_a.is_some(),
            RowField::Operator => self.operator.is_some(),
            RowField::OperandB => self.operand_b.is_some(),
            RowField::Result => self.result.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        RowField::ALL.iter().all(|field| !self.is_present(*field))
    }

    pub fn is_complete(&self) -> bool {
        RowField::ALL.iter().all(|field| self.is_present(*field))
    }

    /// The text of one field, or `None` if it hasn't been filled in.
    pub fn field_text(&self, field: RowField) -> Option<String> {
        match field {
            RowField::OperandA => self.operand_a.map(|v| v.to_string()),
            RowField::Operator => self.operator.map(|v| v.to_string()),
            RowField::OperandB => self.operand_b.map(|v| v.to_string()),
            RowField::Result => self.result.map(|v| v.to_string()),
        }
    }

    pub fn clear(&mut self, field: RowField) {
        match field {
            RowField::OperandA => self.operand_a = None,
            RowField::Operator => self.operator = None,
            RowField::OperandB => self.operand_b = None,
            RowField::Result => self.result = None,
        }
    }

    /// Clears the last field that is present, going from the result back to the first operand.
    /// Returns the cleared field, or `None` if the row was already empty.
    pub fn backspace(&mut self) -> Option<RowField> {
        let field = RowField::ALL
            .into_iter()
            .rev()
            .find(|field| self.is_present(*field))?;
        self.clear(field);
        Some(field)
    }
}

/// Removes the last entered field of a row. An empty row is returned unchanged.
pub fn backspace(mut row: EquationRow) -> EquationRow {
    row.backspace();
    row
}

impl fmt::Display for EquationRow {
    /// Writes `1 + 2 = 3`, with a `_` for every missing field
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = |field| self.field_text(field).unwrap_or_else(|| "_".to_string());
        write!(
            f,
            "{} {} {} = {}",
            text(RowField::OperandA),
            text(RowField::Operator),
            text(RowField::OperandB),
            text(RowField::Result)
        )
    }
}
