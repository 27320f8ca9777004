//! Bisection for finding a root on a sign-change bracket.
//!
//! # Algorithm
//!
//! Each iteration evaluates f at the bracket midpoint m = (a + b) / 2. If
//! |f(m)| < `residual_tol` the midpoint is returned as the root. Otherwise
//! the bracket is narrowed to the half that still changes sign: if
//! f(a)·f(m) < 0 then b ← m, else a ← m.
//!
//! # When to Use
//!
//! - A bracket with f(a)·f(b) ≤ 0 is known (see [`scan`](super::scan))
//! - Guaranteed convergence matters more than speed
//!
//! # Limitations
//!
//! - **Linear convergence**: the recorded error |b − a| / 2 halves each step
//! - **Bracket required**: endpoints with the same sign are rejected with
//!   [`Error::NoSignChange`] before any iteration
//!
//! # Observer Events
//!
//! The solver passes each [`Iteration`] to the observer after recording it.
//! Observers can return [`Action::StopEarly`] to halt at the current midpoint.

mod bracket;
mod config;
mod error;
mod iteration;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use iteration::Iteration;

use rootlab_core::{Function, Observer};
use tracing::{debug, trace, warn};

use crate::equation::{Solution, Status};

use bracket::Bracket;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the current midpoint.
    StopEarly,
}

/// Finds a root of `f` in `bracket` using the bisection method.
///
/// The bracket endpoints may be given in either order.
///
/// # Errors
///
/// Returns [`Error::NoSignChange`] if f(a)·f(b) > 0. No iteration is
/// performed in that case.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Iteration>, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Iteration, Action>,
{
    let mut bracket = Bracket::new(f, bracket).inspect_err(|err| {
        warn!(%err, "bisection rejected bracket");
    })?;
    let mut history = Vec::new();

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let mid_residual = f.evaluate(mid);
        let record = Iteration::new(iter, &bracket, mid, mid_residual);

        trace!(
            iter,
            left = record.left,
            right = record.right,
            mid,
            residual = mid_residual,
            "bisection step"
        );
        history.push(record);

        if let Some(Action::StopEarly) = observer.observe(&record) {
            debug!(iter, x = mid, "bisection stopped by observer");
            return Ok(Solution::new(
                Status::StoppedByObserver,
                mid,
                mid_residual,
                history,
            ));
        }

        if mid_residual.abs() < config.residual_tol() {
            debug!(iter, x = mid, residual = mid_residual, "bisection converged");
            return Ok(Solution::new(
                Status::Converged,
                mid,
                mid_residual,
                history,
            ));
        }

        bracket.shrink(mid, mid_residual);
    }

    let (x, residual) = match history.last() {
        Some(last) => (last.mid, last.mid_residual),
        None => {
            let mid = bracket.midpoint();
            (mid, f.evaluate(mid))
        }
    };

    debug!(
        max_iters = config.max_iters(),
        x, residual, "bisection reached iteration limit"
    );
    Ok(Solution::new(Status::MaxIters, x, residual, history))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns [`Error::NoSignChange`] if f(a)·f(b) > 0.
pub fn solve_unobserved<F>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<Iteration>, Error>
where
    F: Function + ?Sized,
{
    solve(f, bracket, config, ())
}
