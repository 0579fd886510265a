use equation::{CellStatus, EquationRow};
use guess_input::{GameSettings, GameStatus, GuessEditor, KeyInput, KeyOutcome};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{from_js, to_js};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeyPressResult {
    /// The current row changed, or was submitted
    changed: bool,
    /// Message to show when enter was pressed on a row that can't be submitted
    error: Option<String>,
    status: GameStatus,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GuessResult {
    characters: [String; 6],
    statuses: [CellStatus; 4],
}

#[wasm_bindgen]
pub struct EquationEditorBindings {
    editor: GuessEditor,
}

#[wasm_bindgen]
impl EquationEditorBindings {
    #[wasm_bindgen(constructor)]
    pub fn new(
        answer: JsValue,
        max_guesses: Option<usize>,
    ) -> Result<EquationEditorBindings, JsValue> {
        let answer: EquationRow = from_js(answer)?;
        let mut settings = GameSettings::default();
        if let Some(max_guesses) = max_guesses {
            settings.max_guesses = max_guesses;
        }
        Ok(Self {
            editor: GuessEditor::new(answer, settings),
        })
    }

    /// Takes a `KeyboardEvent.key`
    pub fn handle_key(&mut self, key: &str) -> Result<JsValue, JsValue> {
        let outcome = match KeyInput::from_key(key) {
            Some(key) => self.editor.handle_key(key),
            None => KeyOutcome::Ignored,
        };
        let (changed, error) = match outcome {
            KeyOutcome::Ignored => (false, None),
            KeyOutcome::Edited | KeyOutcome::Submitted(_) => (true, None),
            KeyOutcome::Rejected(error) => (false, Some(error.to_string())),
        };
        to_js(&KeyPressResult {
            changed,
            error,
            status: self.editor.status(),
        })
    }

    pub fn add_letter(&mut self, letter: char) -> bool {
        self.editor.add_letter(letter)
    }

    pub fn on_delete_press(&mut self) -> bool {
        self.editor.on_delete_press()
    }

    pub fn on_enter_press(&mut self) -> Result<JsValue, JsValue> {
        let status = self
            .editor
            .on_enter_press()
            .map_err(|error| JsValue::from_str(&error.to_string()))?;
        to_js(&status)
    }

    pub fn current_row(&self) -> Result<JsValue, JsValue> {
        to_js(self.editor.current_row())
    }

    pub fn current_characters(&self) -> Result<JsValue, JsValue> {
        to_js(&self.editor.current_characters())
    }

    pub fn guesses(&self) -> Result<JsValue, JsValue> {
        let guesses: Vec<GuessResult> = self
            .editor
            .guesses()
            .iter()
            .map(|guess| GuessResult {
                characters: equation::row_characters(&guess.row),
                statuses: guess.statuses,
            })
            .collect();
        to_js(&guesses)
    }

    pub fn key_status(&self, key: char) -> Result<JsValue, JsValue> {
        to_js(&self.editor.key_statuses().get(key))
    }

    pub fn keyboard_rows(&self) -> Result<JsValue, JsValue> {
        to_js(&self.editor.keyboard_rows())
    }

    pub fn next_char_is_an_operator(&self) -> bool {
        self.editor.next_char_is_an_operator()
    }

    pub fn game_disabled(&self) -> bool {
        self.editor.game_disabled()
    }
}
