//! Secant method.
//!
//! # Algorithm
//!
//! The state is the pair of the two most recent points `(x₀, x₁)`. Each pass
//! draws the secant line through `(x₀, f(x₀))` and `(x₁, f(x₁))` and moves to
//! `(x₁, c)`, where `c` is where that line crosses zero. The root estimate is
//! always the second point. Convergence near a simple root is superlinear
//! (order ≈ 1.618) without needing a derivative.
//!
//! The iteration runs on the shared [`fixed_point`](super::fixed_point) loop.
//! Equal function values at the seed pair are an error; later in the solve
//! they end the iteration with
//! [`Status::DegenerateStop`](super::Status::DegenerateStop).

use radix_core::{Function, Observer};

use crate::Config;

use super::{evaluate, fixed_point, update::secant_step};

pub use fixed_point::{Action, Error, Event, Solution};

/// Finds a root of `function` with the secant method.
///
/// # Errors
///
/// Returns [`Error::ZeroSecantSlope`] if `f(x₀) == f(x₁)` at the seed pair,
/// or another error if `function` fails or returns a non-finite value.
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
    check_seed(function, seed)?;

    fixed_point::iterate(
        seed,
        |pair: [f64; 2]| Ok(secant_step(function, pair)?.map(|c| [pair[1], c])),
        config,
        observer,
    )
}

/// Finds a root with the secant method without observer support.
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

/// Rejects a seed pair whose secant line is horizontal.
pub(super) fn check_seed<F: Function>(function: &F, seed: [f64; 2]) -> Result<(), Error> {
    let [x0, x1] = seed;
    let f0 = evaluate(function, x0)?.fx;
    let f1 = evaluate(function, x1)?.fx;

    #[allow(clippy::float_cmp)]
    if f0 == f1 {
        return Err(Error::ZeroSecantSlope { x0, x1 });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::Status;

    const ROOT: f64 = 1.365_230_013_414_097;

    fn cubic(x: f64) -> f64 {
        x.powi(3) + 4.0 * x.powi(2) - 10.0
    }

    #[test]
    fn converges_from_bracket_ends() {
        let solution = solve_unobserved(&cubic, [0.0, 5.0], &Config::default()).expect("converges");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, ROOT, epsilon = 1e-9);
        assert_relative_eq!(solution.x, solution.state[1]);
        assert!(solution.iters < 30);
    }

    #[test]
    fn state_shifts_by_one_point_per_pass() {
        let mut events = Vec::new();
        let observer = |event: &Event<[f64; 2]>| {
            events.push(*event);
            None
        };

        solve(&cubic, [0.0, 5.0], &Config::default(), observer).expect("converges");

        assert_relative_eq!(events[0].iterate[0], 5.0);
        assert_relative_eq!(events[0].iterate[1], 5.0 - 215.0 * 5.0 / 225.0);
        for event in &events {
            assert_relative_eq!(event.iterate[0], event.previous[1]);
        }
    }

    #[test]
    fn equal_seed_values_are_an_error() {
        let mut events = 0;
        let observer = |_: &Event<[f64; 2]>| {
            events += 1;
            None
        };

        let result = solve(&|x: f64| x * x - 1.0, [-3.0, 3.0], &Config::default(), observer);

        assert!(matches!(result, Err(Error::ZeroSecantSlope { x0, x1 }) if x0 == -3.0 && x1 == 3.0));
        assert_eq!(events, 0);
    }

    #[test]
    fn single_iteration_returns_seed_pair() {
        let config = Config::new(1, 1e-9).expect("valid config");
        let solution = solve_unobserved(&cubic, [0.0, 5.0], &config).expect("no passes");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 0);
        assert_eq!(solution.state, [0.0, 5.0]);
    }
}
