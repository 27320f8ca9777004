//! Core traits and types for the rootlab workspace.
//!
//! This crate defines the shared abstractions that solvers, observers, and the
//! demonstration build on:
//!
//! - [`Function`] — a real-valued function of one real variable
//! - [`Differentiable`] — a [`Function`] with a closed-form derivative
//! - [`CubicExp`] — the fixed target f(x) = x³ − e^(0.8x) − 20
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`RootSet`] — the ordered list of roots found across solver runs

mod function;
mod observer;
mod root_set;
mod target;

pub use function::{Differentiable, Function, WithDerivative};
pub use observer::Observer;
pub use root_set::RootSet;
pub use target::CubicExp;
