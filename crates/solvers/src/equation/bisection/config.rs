use thiserror::Error;

use crate::equation::{DEFAULT_MAX_ITERS, DEFAULT_RESIDUAL_TOL};

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and positive")]
    ResidualTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            residual_tol: DEFAULT_RESIDUAL_TOL,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// A `max_iters` of zero is allowed; the solver then returns the initial
    /// midpoint without refinement.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is non-positive or non-finite.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
        })
    }

    /// Returns the maximum number of bisection steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence threshold on |f(m)|.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}
