//! Solvers for scalar equations — finding `x` such that `f(x) = 0`.
//!
//! # Bracketing solvers
//!
//! - [`sectioning`] — splits a sign-changing bracket into `n` equal parts per
//!   pass and keeps the part that still changes sign
//! - [`bisection`] — sectioning with `n = 2`
//! - [`trisection`] — sectioning with `n = 3`
//!
//! # Fixed-point solvers
//!
//! - [`fixed_point`] — iterates a caller-supplied map `g` until `g(p) ≈ p`
//! - [`newton`] — `x − f(x)/f′(x)` with a caller-supplied derivative
//! - [`secant`] — two-point update using a finite-difference slope
//! - [`regula_falsi`] — secant update that keeps a sign-changing pair
//! - [`steffensen`] — Aitken-accelerated fixed-point iteration
//!
//! All fixed-point solvers run through the same loop, [`fixed_point::iterate`],
//! with a different [`Update`] rule plugged in.

mod bracket;
mod evaluate;
mod interval;
mod iterate;
mod status;

pub mod update;

pub mod bisection;
pub mod fixed_point;
pub mod newton;
pub mod regula_falsi;
pub mod secant;
pub mod sectioning;
pub mod steffensen;
pub mod trisection;

pub use bracket::{BracketError, Sign};
pub use evaluate::{EvalError, Point, evaluate};
pub use interval::{IntervalCheck, IntervalError, check_interval};
pub use iterate::{Iterate, State};
pub use status::Status;
pub use update::Update;
