//! Newton-Raphson iteration using an analytic derivative.
//!
//! # Algorithm
//!
//! Each iteration evaluates f(x) and f′(x). If |f′(x)| falls below
//! `derivative_tol` the run fails with [`Error::DegenerateDerivative`].
//! Otherwise the Newton step x_new = x − f(x) / f′(x) is computed and its
//! length |x_new − x| recorded as the error. If |f(x)| < `residual_tol` the
//! current x (before the update) is returned; otherwise x ← x_new.
//!
//! # When to Use
//!
//! - The derivative is available in closed form
//! - A starting guess near a simple root is known
//!
//! # Limitations
//!
//! - **Local convergence only**: a poor guess can diverge or cycle
//! - **No fallback**: a vanishing derivative ends the run
//!
//! # Observer Events
//!
//! The solver passes each [`Iteration`] to the observer after recording it.
//! Observers can return [`Action::StopEarly`] to halt at the current iterate.

mod config;
mod error;
mod iteration;


pub use config::{Config, ConfigError, DEFAULT_DERIVATIVE_TOL};
pub use error::Error;
pub use iteration::Iteration;

use rootlab_core::{Differentiable, Observer};
use tracing::{debug, trace, warn};

use crate::equation::{Solution, Status};

/// Control actions supported by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current iterate.
    StopEarly,
}

/// Finds a root of `f` starting from `x0` using Newton-Raphson iteration.
///
/// # Errors
///
/// Returns [`Error::DegenerateDerivative`] if |f′(x)| < `derivative_tol` at
/// any iterate. The error carries the iterations recorded before the failure.
pub fn solve<F, Obs>(
    f: &F,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Iteration>, Error>
where
    F: Differentiable + ?Sized,
    Obs: Observer<Iteration, Action>,
{
    let mut x = x0;
    let mut history = Vec::new();

    for iter in 1..=config.max_iters() {
        let residual = f.evaluate(x);
        let derivative = f.derivative(x);

        if derivative.abs() < config.derivative_tol() {
            warn!(iter, x, derivative, "newton derivative near zero");
            return Err(Error::DegenerateDerivative {
                x,
                derivative,
                history,
            });
        }

        let next = x - residual / derivative;
        let record = Iteration {
            iter,
            x,
            residual,
            derivative,
            error: (next - x).abs(),
        };

        trace!(iter, x, residual, derivative, next, "newton step");
        history.push(record);

        if let Some(Action::StopEarly) = observer.observe(&record) {
            debug!(iter, x, "newton stopped by observer");
            return Ok(Solution::new(
                Status::StoppedByObserver,
                x,
                residual,
                history,
            ));
        }

        if residual.abs() < config.residual_tol() {
            debug!(iter, x, residual, "newton converged");
            return Ok(Solution::new(Status::Converged, x, residual, history));
        }

        x = next;
    }

    let residual = f.evaluate(x);
    debug!(
        max_iters = config.max_iters(),
        x, residual, "newton reached iteration limit"
    );
    Ok(Solution::new(Status::MaxIters, x, residual, history))
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns [`Error::DegenerateDerivative`] if the derivative vanishes.
pub fn solve_unobserved<F>(f: &F, x0: f64, config: &Config) -> Result<Solution<Iteration>, Error>
where
    F: Differentiable + ?Sized,
{
    solve(f, x0, config, ())
}
