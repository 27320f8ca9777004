use super::bracket::Bracket;

/// One bisection step: the bracket on entry, its midpoint, and residuals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Left bracket bound a.
    pub left: f64,
    /// Right bracket bound b.
    pub right: f64,
    /// Midpoint m = (a + b) / 2.
    pub mid: f64,
    /// f(a).
    pub left_residual: f64,
    /// f(b).
    pub right_residual: f64,
    /// f(m).
    pub mid_residual: f64,
    /// Error bound |b − a| / 2.
    pub error: f64,
}

impl Iteration {
    pub(super) fn new(iter: usize, bracket: &Bracket, mid: f64, mid_residual: f64) -> Self {
        Self {
            iter,
            left: bracket.left,
            right: bracket.right,
            mid,
            left_residual: bracket.left_residual,
            right_residual: bracket.right_residual,
            mid_residual,
            error: bracket.half_width(),
        }
    }
}
