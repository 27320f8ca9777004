//! Linear search for a sign-change bracket.
//!
//! The scanner walks consecutive pairs of candidate points (xᵢ, xᵢ₊₁) and
//! stops at the first pair with f(xᵢ)·f(xᵢ₊₁) < 0. It performs a single pass
//! with no refinement; the bracket it finds is meant for [`bisection`].
//!
//! Candidates come either from any ordered iterator ([`find_bracket`]) or
//! from an evenly spaced [`Grid`] ([`scan`]).
//!
//! [`bisection`]: super::bisection

use rootlab_core::Function;
use thiserror::Error;
use tracing::debug;

/// Slack added before flooring the grid point count, so an `end` that is a
/// whole number of steps from `start` survives rounding.
const GRID_SLACK: f64 = 1e-9;

/// Largest number of candidate points a [`Grid`] may hold.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Evenly spaced candidate points `start, start + step, …` up to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    start: f64,
    end: f64,
    step: f64,
    len: usize,
}

/// Errors that can occur when creating a [`Grid`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid bounds must be finite")]
    NonFiniteBounds,

    #[error("grid end must not be less than start")]
    ReversedBounds,

    #[error("grid step must be finite and positive")]
    Step,

    #[error("grid would hold more than {} points", MAX_GRID_POINTS)]
    TooManyPoints,
}

impl Grid {
    /// Creates a validated grid.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is non-finite, `end < start`, `step` is
    /// non-positive or non-finite, or the grid would hold more than
    /// [`MAX_GRID_POINTS`] points.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, GridError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(GridError::NonFiniteBounds);
        }
        if end < start {
            return Err(GridError::ReversedBounds);
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(GridError::Step);
        }

        let intervals = ((end - start) / step + GRID_SLACK).floor();
        #[allow(clippy::cast_precision_loss)]
        let cap = MAX_GRID_POINTS as f64;
        if !intervals.is_finite() || intervals >= cap {
            return Err(GridError::TooManyPoints);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let len = (intervals as usize)
            .checked_add(1)
            .ok_or(GridError::TooManyPoints)?;

        Ok(Self {
            start,
            end,
            step,
            len,
        })
    }

    /// Returns the number of candidate points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the first candidate point.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the requested upper bound.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns the spacing between candidates.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// A grid always holds at least its start point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the candidate points.
    ///
    /// Points are computed as `start + i * step` so rounding does not
    /// accumulate along the grid.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let offset = i as f64 * self.step;
            self.start + offset
        })
    }
}

/// One examined pair of consecutive candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    /// Left candidate.
    pub left: f64,

    /// Right candidate.
    pub right: f64,

    /// f(left).
    pub left_value: f64,

    /// f(right).
    pub right_value: f64,

    /// True if f(left)·f(right) < 0.
    pub sign_change: bool,
}

/// The outcome of a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    /// The first bracket with a strict sign change, if any.
    pub bracket: Option<[f64; 2]>,

    /// Every pair examined, in order, ending at the bracket when one is found.
    pub probes: Vec<Probe>,
}

/// Scans consecutive pairs of `candidates` for the first strict sign change.
///
/// Fewer than two candidates yields no bracket and no probes.
pub fn find_bracket<F, I>(f: &F, candidates: I) -> Scan
where
    F: Function + ?Sized,
    I: IntoIterator<Item = f64>,
{
    let mut points = candidates.into_iter();
    let mut probes = Vec::new();

    let Some(mut left) = points.next() else {
        return Scan {
            bracket: None,
            probes,
        };
    };
    let mut left_value = f.evaluate(left);

    for right in points {
        let right_value = f.evaluate(right);
        let sign_change = left_value * right_value < 0.0;

        probes.push(Probe {
            left,
            right,
            left_value,
            right_value,
            sign_change,
        });

        if sign_change {
            debug!(left, right, "scan found sign change");
            return Scan {
                bracket: Some([left, right]),
                probes,
            };
        }

        left = right;
        left_value = right_value;
    }

    debug!(probes = probes.len(), "scan found no sign change");
    Scan {
        bracket: None,
        probes,
    }
}

/// Scans the points of `grid` for the first strict sign change.
pub fn scan<F>(f: &F, grid: &Grid) -> Scan
where
    F: Function + ?Sized,
{
    find_bracket(f, grid.points())
}
