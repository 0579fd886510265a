use crate::row::{EquationRow, RowField};

/// How many cells a row takes up on screen
pub const CELL_COUNT: usize = 6;

/// The display cells that hold a field of the row, in screen order.
/// Cell 3 is the equals sign, cell 4 is an empty spacer.
pub const FIELD_CELLS: [(RowField, usize); 4] = [
    (RowField::OperandA, 0),
    (RowField::Operator, 1),
    (RowField::OperandB, 2),
    (RowField::Result, 5),
];

/// The text of every cell of a row, `[operand_a, operator, operand_b, "=", "", result]`.
/// Missing fields are empty strings.
pub fn row_characters(row: &EquationRow) -> [String; CELL_COUNT] {
    let mut cells: [String; CELL_COUNT] = Default::default();
    cells[3] = "=".to_string();
    for (field, cell) in FIELD_CELLS {
        cells[cell] = row.field_text(field).unwrap_or_default();
    }
    cells
}
