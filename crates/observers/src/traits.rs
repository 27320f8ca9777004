//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific iteration records, enabling
//! observers to work generically across the solvers.
//!
//! - [`HasEstimate`] — records that carry an iteration counter and estimate
//! - [`HasResidual`] — records that carry the residual at the estimate
//!
//! # Example
//!
//! ```rust
//! use rootlab_core::Observer;
//! use rootlab_observers::traits::{HasEstimate, HasResidual};
//!
//! struct Worst {
//!     residual: f64,
//! }
//!
//! impl<E: HasEstimate + HasResidual, A> Observer<E, A> for Worst {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.residual = self.residual.max(event.residual().abs());
//!         None
//!     }
//! }
//! ```

use rootlab_solvers::equation::{bisection, newton, secant};

/// A record that carries an iteration counter and the current estimate.
pub trait HasEstimate {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;

    /// Returns the estimate whose residual is reported.
    fn x(&self) -> f64;
}

/// A record that carries a residual value.
pub trait HasResidual {
    /// Returns f(x) at the estimate.
    fn residual(&self) -> f64;
}

// --- bisection::Iteration ---

impl HasEstimate for bisection::Iteration {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.mid
    }
}

impl HasResidual for bisection::Iteration {
    fn residual(&self) -> f64 {
        self.mid_residual
    }
}

// --- newton::Iteration ---

impl HasEstimate for newton::Iteration {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasResidual for newton::Iteration {
    fn residual(&self) -> f64 {
        self.residual
    }
}

// --- secant::Iteration ---

impl HasEstimate for secant::Iteration {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasResidual for secant::Iteration {
    fn residual(&self) -> f64 {
        self.residual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use rootlab_core::CubicExp;

    fn last_estimate<T: HasEstimate + HasResidual>(history: &[T]) -> (usize, f64, f64) {
        let last = history.last().expect("non-empty history");
        (last.iter(), last.x(), last.residual())
    }

    #[test]
    fn bisection_reports_midpoint() {
        let solution =
            bisection::solve_unobserved(&CubicExp, [2.0, 4.0], &bisection::Config::default())
                .expect("converges");

        let (iter, x, residual) = last_estimate(&solution.history);
        assert_eq!(iter, solution.iters);
        assert_relative_eq!(x, solution.x);
        assert_relative_eq!(residual, solution.residual);
    }

    #[test]
    fn open_methods_report_current_iterate() {
        let newton = newton::solve_unobserved(&CubicExp, 3.0, &newton::Config::default())
            .expect("converges");
        let secant = secant::solve_unobserved(&CubicExp, [3.0, 3.5], &secant::Config::default())
            .expect("converges");

        assert_relative_eq!(last_estimate(&newton.history).1, newton.x);
        assert_relative_eq!(last_estimate(&secant.history).1, secant.x);
    }
}
