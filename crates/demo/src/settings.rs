//! Fixed parameters of the demonstration run.

/// Residual tolerance shared by all three methods.
pub const TOL: f64 = 1e-6;

/// Iteration cap shared by all three methods.
pub const MAX_ITERS: usize = 100;

/// Newton-Raphson starting point.
pub const NEWTON_X0: f64 = 3.0;

/// Secant starting points (x₀, x₁).
pub const SECANT_GUESSES: [f64; 2] = [3.0, 3.5];

/// Scan grid: start, end, and step.
pub const SCAN_START: f64 = 2.0;
pub const SCAN_END: f64 = 4.0;
pub const SCAN_STEP: f64 = 0.5;

/// Brackets bisected to find the charted roots, in label order.
pub const CHART_BRACKETS: [[f64; 2]; 2] = [[2.0, 4.0], [7.0, 8.0]];

/// Chart domain and visible range.
pub const DOMAIN: [f64; 2] = [-10.0, 10.0];
pub const RANGE: [f64; 2] = [-30.0, 30.0];

/// Number of curve samples across the domain.
pub const SAMPLES: usize = 1000;
