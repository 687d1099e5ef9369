//! Trisection: N-section with three divisions per pass.
//!
//! See [`sectioning`](super::sectioning) for termination rules and observer
//! events.

use radix_core::{Function, Observer};

use crate::Config;

use super::sectioning;

pub use sectioning::{Action, Error, Event, Solution};

/// Finds a root of `function` in `bracket` by trisection.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, a pass cannot choose a single
/// sign change, or `function` fails or returns a non-finite value.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    sectioning::solve(function, bracket, 3, config, observer)
}

/// Finds a root by trisection without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, bracket, config, ())
}
