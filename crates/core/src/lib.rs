//! Core traits for the Radix root-finding toolkit.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`] — a scalar callable `f(x)` supplied by the caller
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
