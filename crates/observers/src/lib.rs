//! Reusable observers for the Radix root-finding toolkit.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in [`radix_solvers`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIterate`], [`CanStopEarly`])
//! - [`bounds`] — Theoretical error bounds to compare measured decay against
//!
//! # Observers
//!
//! - [`History`] — records every iterate
//! - [`ErrorTrace`] — records the distance from each iterate to a known root
//! - [`Tracing`] — emits one `tracing` record per pass
//!
//! None of them ever asks a solver to act, so they can be freely combined
//! with a closure that does.
//!
//! # Features
//!
//! - `plot` — Enables `plot::Figure` for plotting convergence via
//!   egui. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: radix_core::Observer
//! [`HasIterate`]: traits::HasIterate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod bounds;
pub mod traits;

mod error_trace;
mod history;
mod trace;

#[cfg(feature = "plot")]
pub mod plot;

pub use error_trace::ErrorTrace;
pub use history::History;
pub use trace::Tracing;
