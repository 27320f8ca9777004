use thiserror::Error;

use crate::equation::{DEFAULT_MAX_ITERS, DEFAULT_RESIDUAL_TOL};

/// Default threshold below which |f′(x)| is treated as zero.
pub const DEFAULT_DERIVATIVE_TOL: f64 = 1e-12;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
    derivative_tol: f64,
}

/// Errors that can occur when validating a Newton-Raphson solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and positive")]
    ResidualTol,

    #[error("derivative_tol must be finite and non-negative")]
    DerivativeTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            residual_tol: DEFAULT_RESIDUAL_TOL,
            derivative_tol: DEFAULT_DERIVATIVE_TOL,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is non-positive or non-finite, or if
    /// `derivative_tol` is negative or non-finite.
    pub fn new(
        max_iters: usize,
        residual_tol: f64,
        derivative_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        if !derivative_tol.is_finite() || derivative_tol < 0.0 {
            return Err(ConfigError::DerivativeTol);
        }

        Ok(Self {
            max_iters,
            residual_tol,
            derivative_tol,
        })
    }

    /// Returns the maximum number of Newton steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence threshold on |f(x)|.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the threshold below which |f′(x)| ends the run.
    #[must_use]
    pub fn derivative_tol(&self) -> f64 {
        self.derivative_tol
    }
}
