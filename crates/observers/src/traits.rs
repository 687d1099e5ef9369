//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can watch a sectioning solve and a fixed-point solve alike.
//!
//! # Event traits
//!
//! - [`HasIterate`] — events that carry the solver's current iterate
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use radix_core::Observer;
//! use radix_observers::traits::{CanStopEarly, HasIterate};
//!
//! struct CloseEnough {
//!     target: f64,
//!     tolerance: f64,
//! }
//!
//! impl<E: HasIterate, A: CanStopEarly> Observer<E, A> for CloseEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if (event.estimate() - self.target).abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use radix_solvers::equation::{Iterate, State, fixed_point, sectioning};

/// An event that carries the solver's current iterate.
pub trait HasIterate {
    /// Returns the pass counter (1-based).
    fn iter(&self) -> usize;

    /// Returns the iterate produced by this pass.
    fn iterate(&self) -> Iterate;

    /// Returns the root estimate carried by the iterate.
    fn estimate(&self) -> f64 {
        self.iterate().estimate()
    }
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIterate for sectioning::Event<'_> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn iterate(&self) -> Iterate {
        Iterate::Scalar(self.best.x)
    }
}

impl<S: State> HasIterate for fixed_point::Event<S> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn iterate(&self) -> Iterate {
        self.iterate.to_iterate()
    }
}

impl CanStopEarly for sectioning::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for fixed_point::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
