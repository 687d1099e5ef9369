//! Regula falsi (false position).
//!
//! # Algorithm
//!
//! Like the [secant method](super::secant), each pass computes the zero `c`
//! of the line through `(x₀, f(x₀))` and `(x₁, f(x₁))`. Instead of always
//! dropping `x₀`, the next pair is `(x₁, c)` when `f(c)` and `f(x₁)` have
//! strictly opposite signs and `(x₀, c)` otherwise, so a sign change in the
//! seed pair is kept for the whole solve.
//!
//! On convex or concave functions one endpoint is retained forever and
//! convergence is only linear.
//!
//! The iteration runs on the shared [`fixed_point`](super::fixed_point) loop
//! and shares the secant method's seed check.

use radix_core::{Function, Observer};

use crate::Config;

use super::{fixed_point, secant, update::regula_falsi_step};

pub use fixed_point::{Action, Error, Event, Solution};

/// Finds a root of `function` with regula falsi.
///
/// # Errors
///
/// Returns [`Error::ZeroSecantSlope`] if `f(x₀) == f(x₁)` at the seed pair,
/// or another error if `function` fails or returns a non-finite value.
///
/// # Example
///
/// ```
/// use radix_solvers::{Config, equation::{Status, regula_falsi}};
///
/// let f = |x: f64| x.cos() - x;
/// let solution = regula_falsi::solve_unobserved(&f, [0.0, 1.0], &Config::default()).unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!(f(solution.x).abs() < 1e-8);
/// ```
pub fn solve<F, Obs>(
    function: &F,
    seed: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution<[f64; 2]>, Error>
where
    F: Function,
    Obs: Observer<Event<[f64; 2]>, Action>,
{
    secant::check_seed(function, seed)?;

    fixed_point::iterate(
        seed,
        |pair| regula_falsi_step(function, pair),
        config,
        observer,
    )
}

/// Finds a root with regula falsi without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(
    function: &F,
    seed: [f64; 2],
    config: &Config,
) -> Result<Solution<[f64; 2]>, Error> {
    solve(function, seed, config, ())
}
