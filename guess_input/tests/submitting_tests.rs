use equation::{equation_row, CellStatus};
use guess_input::*;

fn type_row(editor: &mut GuessEditor, keys: &str) {
    for c in keys.chars() {
        editor.add_letter(c);
    }
}

#[test]
fn incomplete_rows_are_rejected() {
    let mut editor = GuessEditor::new(equation_row!(3 * 4 = 12), GameSettings::default());
    type_row(&mut editor, "3*4");
    assert_eq!(
        editor.on_enter_press(),
        Err(SubmitError::IncompleteEquation)
    );
    assert_eq!(editor.current_row(), &equation_row!(3 * 4));
    assert!(editor.guesses().is_empty());
}

#[test]
fn wrong_equations_are_rejected() {
    let mut editor = GuessEditor::new(equation_row!(3 * 4 = 12), GameSettings::default());
    type_row(&mut editor, "3*413");
    let error = editor.on_enter_press().unwrap_err();
    assert_eq!(
        error,
        SubmitError::NotAValidEquation(equation_row!(3 * 4 = 13))
    );
    assert_eq!(error.to_string(), "3 * 4 = 13 is not a valid equation");
    assert!(editor.guesses().is_empty());
}

#[test]
fn valid_guess_is_scored_and_row_reset() {
    let mut editor = GuessEditor::new(equation_row!(3 * 4 = 12), GameSettings::default());
    type_row(&mut editor, "4*312");
    assert_eq!(
        editor.handle_key(KeyInput::Enter),
        KeyOutcome::Submitted(GameStatus::InProgress)
    );
    assert!(editor.current_row().is_empty());
    assert_eq!(editor.guesses().len(), 1);
    assert_eq!(
        editor.guesses()[0].statuses,
        [
            CellStatus::Yellow,
            CellStatus::Green,
            CellStatus::Yellow,
            CellStatus::Green
        ]
    );
    assert_eq!(editor.key_statuses().get('*'), CellStatus::Green);
    assert_eq!(editor.key_statuses().get('3'), CellStatus::Yellow);
}

#[test]
fn correct_guess_wins() {
    let mut editor = GuessEditor::new(equation_row!(3 * 4 = 12), GameSettings::default());
    type_row(&mut editor, "3*412");
    assert_eq!(editor.on_enter_press(), Ok(GameStatus::Won));
    assert!(editor.game_disabled());
    assert_eq!(editor.handle_key(KeyInput::Char('1')), KeyOutcome::Ignored);
    assert_eq!(editor.on_enter_press(), Err(SubmitError::GameOver));
}

#[test]
fn running_out_of_guesses_loses() {
    let settings = GameSettings {
        max_guesses: 2,
        ..GameSettings::default()
    };
    let mut editor = GuessEditor::new(equation_row!(3 * 4 = 12), settings);
    type_row(&mut editor, "1+23");
    assert_eq!(editor.on_enter_press(), Ok(GameStatus::InProgress));
    type_row(&mut editor, "2+35");
    assert_eq!(editor.on_enter_press(), Ok(GameStatus::Lost));
    assert_eq!(editor.status(), GameStatus::Lost);
    assert_eq!(editor.guesses().len(), 2);
    assert!(!editor.add_letter('1'));
}

#[test]
fn enter_key_reports_rejections() {
    let mut editor = GuessEditor::new(equation_row!(3 * 4 = 12), GameSettings::default());
    assert_eq!(
        editor.handle_key(KeyInput::from_key("Enter").unwrap()),
        KeyOutcome::Rejected(SubmitError::IncompleteEquation)
    );
}
