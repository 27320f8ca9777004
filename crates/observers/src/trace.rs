use rootlab_core::Observer;
use tracing::debug;

use crate::traits::{HasEstimate, HasResidual};

/// An observer that emits one `tracing` event per solver iteration.
///
/// Events are logged at `DEBUG` level under the observer's method name and
/// never steer the solver.
#[derive(Debug, Clone, Copy)]
pub struct TraceObserver {
    method: &'static str,
}

impl TraceObserver {
    /// Creates an observer that tags its events with `method`.
    #[must_use]
    pub fn new(method: &'static str) -> Self {
        Self { method }
    }

    /// Returns the method name used to tag events.
    #[must_use]
    pub fn method(&self) -> &'static str {
        self.method
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        debug!(
            method = self.method,
            iter = event.iter(),
            x = event.x(),
            residual = event.residual(),
            "iteration"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootlab_core::CubicExp;
    use rootlab_solvers::equation::{Status, newton};

    #[test]
    fn never_steers_the_solver() {
        let observer = TraceObserver::new("newton");

        let solution = newton::solve(&CubicExp, 3.0, &newton::Config::default(), observer)
            .expect("converges");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(observer.method(), "newton");
    }
}
