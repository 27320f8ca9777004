/// One secant step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Previous iterate x_prev.
    pub prev: f64,
    /// Current iterate x.
    pub x: f64,
    /// f(x_prev).
    pub prev_residual: f64,
    /// f(x).
    pub residual: f64,
    /// Residual magnitude |f(x)|.
    pub error: f64,
}
