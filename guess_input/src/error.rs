use equation::EquationRow;
use thiserror::Error;

/// Why pressing enter did not submit the current row
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Not enough numbers")]
    IncompleteEquation,
    #[error("{0} is not a valid equation")]
    NotAValidEquation(EquationRow),
    #[error("The game is already over")]
    GameOver,
}
