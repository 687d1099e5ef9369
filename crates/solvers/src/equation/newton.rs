//! Newton's method.
//!
//! # Algorithm
//!
//! Starting from a seed `x₀`, each pass replaces `x` with `x − f(x) / f′(x)`
//! using a caller-supplied derivative. Near a simple root convergence is
//! quadratic, but nothing is guaranteed from a poor seed.
//!
//! The iteration runs on the shared [`fixed_point`](super::fixed_point) loop,
//! so termination and observer events follow that module. A derivative of
//! exactly zero at the seed is an error; later in the solve it ends the
//! iteration with [`Status::DegenerateStop`](super::Status::DegenerateStop).

use radix_core::{Function, Observer};

use crate::Config;

use super::{evaluate, fixed_point, update::newton_step};

pub use fixed_point::{Action, Error, Event, Solution};

/// Finds a root of `function` with Newton's method.
///
/// # Errors
///
/// Returns [`Error::ZeroDerivative`] if `derivative` is zero at `seed`, or
/// another error if either function fails or returns a non-finite value.
///
/// # Example
///
/// ```
/// use radix_solvers::{Config, equation::{Status, newton}};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
/// let solution = newton::solve_unobserved(&f, &df, 1.0, &Config::default()).unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn solve<F, D, Obs>(
    function: &F,
    derivative: &D,
    seed: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: Function,
    D: Function,
    Obs: Observer<Event<f64>, Action>,
{
    #[allow(clippy::float_cmp)]
    if evaluate(derivative, seed)?.fx == 0.0 {
        return Err(Error::ZeroDerivative { x: seed });
    }

    fixed_point::iterate(
        seed,
        |x| newton_step(function, derivative, x),
        config,
        observer,
    )
}

/// Finds a root with Newton's method without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(
    function: &F,
    derivative: &D,
    seed: f64,
    config: &Config,
) -> Result<Solution<f64>, Error>
where
    F: Function,
    D: Function,
{
    solve(function, derivative, seed, config, ())
}
