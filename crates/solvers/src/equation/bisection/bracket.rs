use rootlab_core::Function;

use super::Error;

/// Current bracket bounds and their residuals.
///
/// Invariant: `left_residual * right_residual <= 0` on entry to each
/// iteration. It holds by construction and is not re-validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    pub(super) left: f64,
    pub(super) right: f64,
    pub(super) left_residual: f64,
    pub(super) right_residual: f64,
}

impl Bracket {
    /// Orders the endpoints, evaluates them, and checks for a sign change.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSignChange` if f(left)·f(right) > 0.
    pub(super) fn new<F>(f: &F, bounds: [f64; 2]) -> Result<Self, Error>
    where
        F: Function + ?Sized,
    {
        let [a, b] = bounds;
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        let left_residual = f.evaluate(left);
        let right_residual = f.evaluate(right);

        if left_residual * right_residual > 0.0 {
            return Err(Error::NoSignChange {
                left,
                right,
                left_residual,
                right_residual,
            });
        }

        Ok(Self {
            left,
            right,
            left_residual,
            right_residual,
        })
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns half the bracket width, the bound on the midpoint's error.
    pub(super) fn half_width(&self) -> f64 {
        0.5 * (self.right - self.left).abs()
    }

    /// Keeps the half of the bracket where the sign change lies.
    ///
    /// If f(left)·f(mid) < 0 the root is in [left, mid], otherwise it is in
    /// [mid, right].
    pub(super) fn shrink(&mut self, mid: f64, mid_residual: f64) {
        if self.left_residual * mid_residual < 0.0 {
            self.right = mid;
            self.right_residual = mid_residual;
        } else {
            self.left = mid;
            self.left_residual = mid_residual;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn line(x: f64) -> f64 {
        x - 1.25
    }

    #[test]
    fn new_orders_reversed_bounds() {
        let bracket = Bracket::new(&line, [3.0, 0.0]).expect("valid bracket");

        assert_relative_eq!(bracket.left, 0.0);
        assert_relative_eq!(bracket.right, 3.0);
        assert_relative_eq!(bracket.left_residual, -1.25);
        assert_relative_eq!(bracket.right_residual, 1.75);
    }

    #[test]
    fn new_rejects_no_sign_change() {
        let err = Bracket::new(&line, [2.0, 3.0]);
        assert!(matches!(err, Err(Error::NoSignChange { .. })));
    }

    #[test]
    fn new_accepts_root_at_endpoint() {
        let bracket = Bracket::new(&line, [1.25, 3.0]).expect("zero product is allowed");
        assert_relative_eq!(bracket.left_residual, 0.0);
    }

    #[test]
    fn shrink_keeps_sign_change() {
        let mut bracket = Bracket::new(&line, [0.0, 2.0]).expect("valid bracket");

        bracket.shrink(1.0, line(1.0));
        assert_relative_eq!(bracket.left, 1.0);
        assert_relative_eq!(bracket.right, 2.0);

        bracket.shrink(1.5, line(1.5));
        assert_relative_eq!(bracket.left, 1.0);
        assert_relative_eq!(bracket.right, 1.5);
        assert_relative_eq!(bracket.half_width(), 0.25);
    }
}
