use thiserror::Error;

use crate::equation::{DEFAULT_MAX_ITERS, DEFAULT_RESIDUAL_TOL};

/// Default threshold below which |f(x) − f(x_prev)| is treated as zero.
pub const DEFAULT_DIFFERENCE_TOL: f64 = 1e-12;

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
    difference_tol: f64,
}

/// Errors that can occur when validating a secant solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and positive")]
    ResidualTol,

    #[error("difference_tol must be finite and non-negative")]
    DifferenceTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            residual_tol: DEFAULT_RESIDUAL_TOL,
            difference_tol: DEFAULT_DIFFERENCE_TOL,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is non-positive or non-finite, or if
    /// `difference_tol` is negative or non-finite.
    pub fn new(
        max_iters: usize,
        residual_tol: f64,
        difference_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        if !difference_tol.is_finite() || difference_tol < 0.0 {
            return Err(ConfigError::DifferenceTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
            difference_tol,
        })
    }

    /// Returns the maximum number of secant steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence threshold on |f(x)|.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the threshold below which |f(x) − f(x_prev)| ends the run.
    #[must_use]
    pub fn difference_tol(&self) -> f64 {
        self.difference_tol
    }
}
