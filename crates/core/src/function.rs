/// A real-valued function of a single real variable.
///
/// Implementations are expected to be pure: evaluating the same `x` twice must
/// give the same value. Overflow is not trapped; non-finite values propagate
/// as ordinary floating-point results.
///
/// Closures of type `Fn(f64) -> f64` implement this trait automatically.
pub trait Function {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: f64) -> f64;
}

/// A [`Function`] that also provides its first derivative.
pub trait Differentiable: Function {
    /// Evaluates the derivative at `x`.
    fn derivative(&self, x: f64) -> f64;
}

/// Blanket implementation for function closures.
impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Pairs a function closure with its derivative closure.
///
/// This lets ad-hoc functions be used with derivative-based solvers:
///
/// ```
/// use rootlab_core::{Differentiable, Function, WithDerivative};
///
/// let square = WithDerivative::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
/// assert_eq!(square.evaluate(2.0), 2.0);
/// assert_eq!(square.derivative(2.0), 4.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D> {
    function: F,
    derivative: D,
}

impl<F, D> WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Creates a differentiable function from a function and its derivative.
    pub fn new(function: F, derivative: D) -> Self {
        Self {
            function,
            derivative,
        }
    }
}

impl<F, D> Function for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        (self.function)(x)
    }
}

impl<F, D> Differentiable for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval_at(f: &impl Function, x: f64) -> f64 {
        f.evaluate(x)
    }

    #[test]
    fn closures_are_functions() {
        let offset = 3.0;
        let f = |x: f64| x + offset;

        assert_relative_eq!(eval_at(&f, 2.0), 5.0);
    }

    #[test]
    fn with_derivative_dispatches_both_closures() {
        let cube = WithDerivative::new(|x: f64| x.powi(3), |x: f64| 3.0 * x * x);

        assert_relative_eq!(cube.evaluate(2.0), 8.0);
        assert_relative_eq!(cube.derivative(2.0), 12.0);
    }
}
