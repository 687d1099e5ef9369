//! Classical root-finding solvers for scalar equations `f(x) = 0`.
//!
//! Two solver families share one [`Config`]:
//!
//! - **Bracketing** — [`equation::sectioning`] and its specializations
//!   [`equation::bisection`] and [`equation::trisection`] narrow an interval
//!   known to contain a sign change.
//! - **Fixed point** — [`equation::fixed_point`] iterates an update rule until
//!   consecutive iterates agree; [`equation::newton`], [`equation::secant`],
//!   [`equation::regula_falsi`] and [`equation::steffensen`] plug in their own
//!   rules.
//!
//! Every solver accepts an [`Observer`](radix_core::Observer) that sees each
//! iteration and may stop the solve early.

mod config;

pub mod equation;

pub use config::{Config, ConfigError};
