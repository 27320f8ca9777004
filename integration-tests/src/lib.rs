//! Shared fixtures for cross-crate tests.

use rootlab_solvers::equation::{DEFAULT_MAX_ITERS, bisection, newton, secant};

/// Residual tolerance used throughout the tests.
pub const TOL: f64 = 1e-6;

/// Bisection configuration with the given iteration cap.
#[must_use]
pub fn bisection_config(max_iters: usize) -> bisection::Config {
    bisection::Config::new(max_iters, TOL).expect("valid tolerance")
}

/// Newton-Raphson configuration with the given iteration cap.
#[must_use]
pub fn newton_config(max_iters: usize) -> newton::Config {
    newton::Config::new(max_iters, TOL, newton::DEFAULT_DERIVATIVE_TOL).expect("valid tolerances")
}

/// Secant configuration with the given iteration cap.
#[must_use]
pub fn secant_config(max_iters: usize) -> secant::Config {
    secant::Config::new(max_iters, TOL, secant::DEFAULT_DIFFERENCE_TOL).expect("valid tolerances")
}

/// The three configurations at the default iteration cap.
#[must_use]
pub fn default_configs() -> (bisection::Config, newton::Config, secant::Config) {
    (
        bisection_config(DEFAULT_MAX_ITERS),
        newton_config(DEFAULT_MAX_ITERS),
        secant_config(DEFAULT_MAX_ITERS),
    )
}
