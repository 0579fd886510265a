//! Turns key presses into edits and submissions of equation rows.

pub mod error;
pub mod guess_editor;
pub mod key_input;
pub mod keyboard;
pub mod settings;

pub use error::SubmitError;
pub use guess_editor::{GameStatus, Guess, GuessEditor, KeyOutcome};
pub use key_input::{add_letter, next_char_is_an_operator, KeyInput, NUMBERS};
pub use keyboard::keyboard_rows;
pub use settings::GameSettings;
