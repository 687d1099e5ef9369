//! Bisection: N-section with two divisions per pass.
//!
//! Each pass evaluates the bracket endpoints and midpoint, then keeps the half
//! that still holds the sign change. See [`sectioning`](super::sectioning) for
//! termination rules and observer events.

use radix_core::{Function, Observer};

use crate::Config;

use super::sectioning;

pub use sectioning::{Action, Error, Event, Solution};

/// Finds a root of `function` in `bracket` by bisection.
///
/// # Errors
///
/// Returns an error if the bracket is invalid, a pass cannot choose a single
/// sign change, or `function` fails or returns a non-finite value.
///
/// # Example
///
/// ```
/// use radix_solvers::{Config, equation::{Status, bisection}};
///
/// let f = |x: f64| x.powi(3) + 4.0 * x.powi(2) - 10.0;
/// let solution = bisection::solve_unobserved(&f, [0.0, 5.0], &Config::default()).unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!((solution.x - 1.365_230_013).abs() < 1e-8);
/// ```
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
    sectioning::solve(function, bracket, 2, config, observer)
}

/// Finds a root by bisection without observer support.
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
