use crate::{Differentiable, Function};

/// The fixed target function f(x) = x³ − e^(0.8x) − 20.
///
/// Its derivative is f′(x) = 3x² − 0.8·e^(0.8x). The function has two real
/// roots: one in [3, 3.5] (≈ 3.2082) and one in [7, 8] (≈ 7.4898).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CubicExp;

impl CubicExp {
    /// Human-readable form of the function, used in report headers.
    pub const EXPRESSION: &'static str = "f(x) = x³ - e^(0.8x) - 20";

    /// Human-readable form of the derivative.
    pub const DERIVATIVE_EXPRESSION: &'static str = "f'(x) = 3x² - 0.8e^(0.8x)";

    const RATE: f64 = 0.8;
    const OFFSET: f64 = 20.0;
}

impl Function for CubicExp {
    fn evaluate(&self, x: f64) -> f64 {
        x.powi(3) - (Self::RATE * x).exp() - Self::OFFSET
    }
}

impl Differentiable for CubicExp {
    fn derivative(&self, x: f64) -> f64 {
        3.0 * x * x - Self::RATE * (Self::RATE * x).exp()
    }
}
