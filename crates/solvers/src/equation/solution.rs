/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured residual tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// The solution still holds the last estimate, which callers should treat
    /// as best-effort.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns true if the solver met its convergence criterion.
    #[must_use]
    pub fn is_converged(self) -> bool {
        self == Status::Converged
    }
}

/// The result of a solver run that did not fail.
///
/// `T` is the solver's per-iteration record type.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub x: f64,

    /// Residual f(x) at the reported estimate.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// One record per iteration, in order.
    pub history: Vec<T>,
}

impl<T> Solution<T> {
    /// Builds a solution whose iteration count is the history length.
    pub(crate) fn new(status: Status, x: f64, residual: f64, history: Vec<T>) -> Self {
        Self {
            status,
            x,
            residual,
            iters: history.len(),
            history,
        }
    }

    /// Returns the root if the solver converged.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        self.status.is_converged().then_some(self.x)
    }
}
