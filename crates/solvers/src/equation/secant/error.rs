use thiserror::Error;

use super::Iteration;

/// Errors that can occur during secant solving.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The two most recent residuals are too close, so the secant is flat.
    ///
    /// `history` holds the iterations completed before the failure.
    #[error("stagnant secant between x = {prev} and x = {x}: f difference = {difference}")]
    StagnantSecant {
        prev: f64,
        x: f64,
        difference: f64,
        history: Vec<Iteration>,
    },
}

impl Error {
    /// Returns the iterations recorded before the failure.
    #[must_use]
    pub fn history(&self) -> &[Iteration] {
        match self {
            Error::StagnantSecant { history, .. } => history,
        }
    }
}
