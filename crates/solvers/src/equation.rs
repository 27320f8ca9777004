//! Solvers for scalar equations f(x) = 0.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a sign-change bracket
//! - [`newton`] — quadratic local convergence using the analytic derivative
//! - [`secant`] — superlinear convergence from two starting points, no derivative
//!
//! The [`scan`] module finds a sign-change bracket to feed [`bisection`].
//!
//! All solvers share the same convergence criterion, |f(x)| < `residual_tol`,
//! and the same [`Solution`] shape.

mod solution;

pub mod bisection;
pub mod newton;
pub mod scan;
pub mod secant;

pub use solution::{Solution, Status};

/// Default iteration cap shared by all solvers.
pub const DEFAULT_MAX_ITERS: usize = 100;

/// Default residual tolerance shared by all solvers.
pub const DEFAULT_RESIDUAL_TOL: f64 = 1e-6;
