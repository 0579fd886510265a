//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// A row the way the frontend builds it, where every number is a float
#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    operand_a: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operator: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operand_b: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<f64>,
}

fn js_row(a: f64, operator: &'static str, b: f64, result: f64) -> JsValue {
    serde_wasm_bindgen::to_value(&JsRow {
        operand_a: Some(a),
        operator: Some(operator),
        operand_b: Some(b),
        result: Some(result),
    })
    .unwrap()
}

fn characters(value: JsValue) -> Vec<String> {
    serde_wasm_bindgen::from_value(value).unwrap()
}

#[wasm_bindgen_test]
fn valid_equation_from_js() {
    assert!(equation_puzzle::valid_equation(js_row(2.0, "+", 7.0, 9.0)));
    assert!(!equation_puzzle::valid_equation(js_row(5.0, "^", 3.0, 125.0)));
    assert!(!equation_puzzle::valid_equation(js_row(0.0, "-", 3.0, -3.0)));
}

#[wasm_bindgen_test]
fn non_integer_rows_are_not_valid() {
    assert!(!equation_puzzle::valid_equation(js_row(2.0, "+", 5.5, 7.5)));
}

#[wasm_bindgen_test]
fn backspace_keeps_zeroes() {
    let row = js_row(0.0, "+", 0.0, 0.0);
    let row = equation_puzzle::backspace(row).unwrap();
    let cells = characters(equation_puzzle::row_characters(row).unwrap());
    assert_eq!(cells, vec!["0", "+", "0", "=", "", ""]);
}

#[wasm_bindgen_test]
fn row_characters_of_empty_row() {
    let row = serde_wasm_bindgen::to_value(&JsRow::default()).unwrap();
    let cells = characters(equation_puzzle::row_characters(row).unwrap());
    assert_eq!(cells, vec!["", "", "", "=", "", ""]);
}

#[wasm_bindgen_test]
fn fun_answers_from_js() {
    assert!(equation_puzzle::is_fun_answer(js_row(1.0, "+", 2.0, 3.0)));
    assert!(!equation_puzzle::is_fun_answer(js_row(4.0, "/", 4.0, 1.0)));
}

#[wasm_bindgen_test]
fn editor_handles_keys() {
    let mut editor =
        equation_puzzle::EquationEditorBindings::new(js_row(3.0, "*", 4.0, 12.0), None).unwrap();
    for key in ["3", "*", "4", "1", "2"] {
        editor.handle_key(key).unwrap();
    }
    let cells = characters(editor.current_characters().unwrap());
    assert_eq!(cells, vec!["3", "*", "4", "=", "", "12"]);
    editor.handle_key("Enter").unwrap();
    assert!(editor.game_disabled());
}
