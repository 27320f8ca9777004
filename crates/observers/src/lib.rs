//! Reusable observers and charts for the rootlab solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the bisection, Newton-Raphson, and secant solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasEstimate`], [`HasResidual`])
//! - [`chart`] — Samples a function and marks its roots for plotting
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] and [`Chart::show`] for rendering via
//!   egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: rootlab_core::Observer
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasResidual`]: traits::HasResidual
//! [`Chart::show`]: chart::Chart

pub mod chart;
pub mod traits;

mod trace;

#[cfg(feature = "plot")]
mod plot;

pub use chart::{Chart, Marker};
pub use trace::TraceObserver;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
