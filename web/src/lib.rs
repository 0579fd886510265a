mod equation_editor;
mod utils;

use equation::EquationRow;
use serde::Serialize;
use utils::set_panic_hook;
use wasm_bindgen::prelude::*;

pub use equation_editor::EquationEditorBindings;

// TODO: Or maybe just use the default allocator
#[cfg(target_arch = "wasm32")]
use lol_alloc::{FreeListAllocator, LockedAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: LockedAllocator<FreeListAllocator> =
    LockedAllocator::new(FreeListAllocator::new());

#[wasm_bindgen(start)]
fn main() {
    set_panic_hook();
    utils::init_logging(cfg!(debug_assertions));
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    // Large numbers won't be serialized correctly, but rows only hold small ones.
    let serializer = serde_wasm_bindgen::Serializer::new();
    Ok(value.serialize(&serializer)?)
}

/// Rows come from JavaScript, where every number is a float.
/// Those that can't be an `EquationRow`, like `2 + 5.5`, are reported as an error.
fn from_js(row: JsValue) -> Result<EquationRow, serde_wasm_bindgen::Error> {
    serde_wasm_bindgen::from_value(row)
}

#[wasm_bindgen]
pub fn backspace(row: JsValue) -> Result<JsValue, JsValue> {
    let row = from_js(row)?;
    to_js(&equation::backspace(row))
}

#[wasm_bindgen(js_name = validEquation)]
pub fn valid_equation(row: JsValue) -> bool {
    match from_js(row) {
        Ok(row) => equation::valid_equation(&row),
        Err(error) => {
            log::debug!("Not a valid equation: {}", error);
            false
        }
    }
}

#[wasm_bindgen(js_name = isFunAnswer)]
pub fn is_fun_answer(row: JsValue) -> bool {
    match from_js(row) {
        Ok(row) => equation::is_fun_answer(&row),
        Err(error) => {
            log::debug!("Not a fun answer: {}", error);
            false
        }
    }
}

#[wasm_bindgen(js_name = rowCharacters)]
pub fn row_characters(row: JsValue) -> Result<JsValue, JsValue> {
    let row = from_js(row)?;
    to_js(&equation::row_characters(&row))
}
