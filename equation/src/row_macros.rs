#[macro_export]
macro_rules! operator {
  (+) => {
    $crate::operator::Operator::Add
  };
  (-) => {
    $crate::operator::Operator::Subtract
  };
  (*) => {
    $crate::operator::Operator::Multiply
  };
  (/) => {
    $crate::operator::Operator::Divide
  };
  (^) => {
    $crate::operator::Operator::Power
  };
  (%) => {
    $crate::operator::Operator::Modulo
  };
}

/// Writes a row the way it looks on screen, for example `equation_row!(1 + 2 = 3)`.
/// Leaving off fields from the end gives a partially filled row, `equation_row!(1 +)`.
#[macro_export]
macro_rules! equation_row {
  () => {
    $crate::row::EquationRow::new()
  };
  ($a:literal) => {
    $crate::row::EquationRow {
      operand_a: Some($a),
      ..$crate::row::EquationRow::new()
    }
  };
  ($a:literal $op:tt) => {
    $crate::row::EquationRow {
      operand_a: Some($a),
      operator: Some($crate::operator!($op)),
      ..$crate::row::EquationRow::new()
    }
  };
  ($a:literal $op:tt $b:literal) => {
    $crate::row::EquationRow {
      operand_a: Some($a),
      operator: Some($crate::operator!($op)),
      operand_b: Some($b),
      result: None,
    }
  };
  ($a:literal $op:tt $b:literal = $r:literal) => {
    $crate::row::EquationRow::complete($a, $crate::operator!($op), $b, $r)
  };
}
