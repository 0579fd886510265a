use equation::equation_row;
use equation::row::EquationRow;
use serde_json::json;

#[test]
fn rows_use_the_same_keys_as_the_frontend() {
    let row = equation_row!(9 % 4 = 1);
    assert_eq!(
        serde_json::to_value(&row).unwrap(),
        json!({ "operandA": 9, "operator": "%", "operandB": 4, "result": 1 })
    );
}

#[test]
fn missing_fields_are_left_out() {
    let row = equation_row!(0 ^);
    assert_eq!(
        serde_json::to_value(&row).unwrap(),
        json!({ "operandA": 0, "operator": "^" })
    );
    assert_eq!(serde_json::to_value(EquationRow::new()).unwrap(), json!({}));
}

#[test]
fn partial_rows_deserialize() {
    let row: EquationRow = serde_json::from_value(json!({ "operandA": 0 })).unwrap();
    assert_eq!(row, equation_row!(0));

    let row: EquationRow =
        serde_json::from_value(json!({ "operandA": 5, "operator": "/", "operandB": 1 })).unwrap();
    assert_eq!(row, equation_row!(5 / 1));
}

#[test]
fn unknown_operators_are_rejected() {
    let row = serde_json::from_value::<EquationRow>(json!({ "operandA": 5, "operator": "x" }));
    assert!(row.is_err());
}
