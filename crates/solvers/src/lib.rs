//! Root-finding solvers for scalar functions.
//!
//! Solvers take a [`Function`] (or [`Differentiable`] function), a starting
//! point or bracket, a validated config, and an [`Observer`]. They return a
//! [`Solution`] carrying the full per-iteration history, or an error that
//! carries whatever history was produced before the failure.
//!
//! [`Function`]: rootlab_core::Function
//! [`Differentiable`]: rootlab_core::Differentiable
//! [`Observer`]: rootlab_core::Observer
//! [`Solution`]: equation::Solution

pub mod equation;
