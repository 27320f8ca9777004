//! Secant iteration from two starting points.
//!
//! # Algorithm
//!
//! The secant method replaces Newton's derivative with the slope through the
//! two most recent iterates. Each iteration checks the denominator first: if
//! |f(x) − f(x_prev)| falls below `difference_tol` the run fails with
//! [`Error::StagnantSecant`]. Otherwise
//!
//! ```text
//! x_new = x − f(x)·(x − x_prev) / (f(x) − f(x_prev))
//! ```
//!
//! is computed, |f(x)| is recorded as the error, and x is returned if
//! |f(x)| < `residual_tol`. Otherwise (x_prev, x) ← (x, x_new).
//!
//! # When to Use
//!
//! - No derivative is available
//! - Two starting points near the root are known
//!
//! Convergence near a simple root is superlinear (order ≈ 1.618).
//!
//! # Observer Events
//!
//! The solver passes each [`Iteration`] to the observer after recording it.
//! Observers can return [`Action::StopEarly`] to halt at the current iterate.

mod config;
mod error;
mod iteration;


pub use config::{Config, ConfigError, DEFAULT_DIFFERENCE_TOL};
pub use error::Error;
pub use iteration::Iteration;

use rootlab_core::{Function, Observer};
use tracing::{debug, trace, warn};

use crate::equation::{Solution, Status};

/// Control actions supported by the secant solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current iterate.
    StopEarly,
}

/// Finds a root of `f` from the starting points `[x0, x1]` using the secant
/// method.
///
/// # Errors
///
/// Returns [`Error::StagnantSecant`] if |f(x) − f(x_prev)| < `difference_tol`
/// at any step, including the first (e.g. when `x0 == x1`). The error carries
/// the iterations recorded before the failure.
pub fn solve<F, Obs>(
    f: &F,
    guesses: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Iteration>, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Iteration, Action>,
{
    let [mut prev, mut x] = guesses;
    let mut prev_residual = f.evaluate(prev);
    let mut residual = f.evaluate(x);
    let mut history = Vec::new();

    for iter in 1..=config.max_iters() {
        let difference = residual - prev_residual;

        if difference.abs() < config.difference_tol() {
            warn!(iter, prev, x, difference, "secant slope stagnated");
            return Err(Error::StagnantSecant {
                prev,
                x,
                difference,
                history,
            });
        }

        let next = x - residual * (x - prev) / difference;
        let record = Iteration {
            iter,
            prev,
            x,
            prev_residual,
            residual,
            error: residual.abs(),
        };

        trace!(iter, prev, x, residual, next, "secant step");
        history.push(record);

        if let Some(Action::StopEarly) = observer.observe(&record) {
            debug!(iter, x, "secant stopped by observer");
            return Ok(Solution::new(
                Status::StoppedByObserver,
                x,
                residual,
                history,
            ));
        }

        if residual.abs() < config.residual_tol() {
            debug!(iter, x, residual, "secant converged");
            return Ok(Solution::new(Status::Converged, x, residual, history));
        }

        prev = x;
        prev_residual = residual;
        x = next;
        residual = f.evaluate(x);
    }

    debug!(
        max_iters = config.max_iters(),
        x, residual, "secant reached iteration limit"
    );
    Ok(Solution::new(Status::MaxIters, x, residual, history))
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns [`Error::StagnantSecant`] if the secant slope vanishes.
pub fn solve_unobserved<F>(
    f: &F,
    guesses: [f64; 2],
    config: &Config,
) -> Result<Solution<Iteration>, Error>
where
    F: Function + ?Sized,
{
    solve(f, guesses, config, ())
}
