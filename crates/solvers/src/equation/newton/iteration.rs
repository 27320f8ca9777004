/// One Newton-Raphson step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate x before the update.
    pub x: f64,
    /// f(x).
    pub residual: f64,
    /// f′(x).
    pub derivative: f64,
    /// Step length |x_new − x|.
    pub error: f64,
}
