use thiserror::Error;

use super::Iteration;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The derivative vanished, so the Newton step is undefined.
    ///
    /// `history` holds the iterations completed before the failure.
    #[error("derivative near zero at x = {x}: f'(x) = {derivative}")]
    DegenerateDerivative {
        x: f64,
        derivative: f64,
        history: Vec<Iteration>,
    },
}

impl Error {
    /// Returns the iterations recorded before the failure.
    #[must_use]
    pub fn history(&self) -> &[Iteration] {
        match self {
            Error::DegenerateDerivative { history, .. } => history,
        }
    }
}
