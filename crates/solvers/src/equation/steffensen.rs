//! Steffensen's method.
//!
//! # Algorithm
//!
//! Accelerates plain fixed-point iteration of a map `m` with Aitken's Δ²
//! extrapolation. Each pass evaluates `m(x)` and `m(m(x))` and moves to
//!
//! ```text
//! x − (m(x) − x)² / (m(m(x)) − 2·m(x) + x)
//! ```
//!
//! Convergence is quadratic near a fixed point where `|m′| < 1`, using only
//! map evaluations. A zero denominator ends the solve with
//! [`Status::DegenerateStop`](super::Status::DegenerateStop), which is the
//! usual outcome once the iterate sits on the fixed point to machine precision.

use radix_core::{Function, Observer};

use crate::Config;

use super::{fixed_point, update::steffensen_step};

pub use fixed_point::{Action, Error, Event, Solution};

/// Finds a fixed point `p = map(p)` with Steffensen's method.
///
/// # Errors
///
/// Returns an error if `map` fails or returns a non-finite value.
pub fn solve<M, Obs>(
    map: &M,
    seed: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution<f64>, Error>
where
    M: Function,
    Obs: Observer<Event<f64>, Action>,
{
    fixed_point::iterate(seed, |x| steffensen_step(map, x), config, observer)
}

/// Finds a fixed point with Steffensen's method without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M: Function>(
    map: &M,
    seed: f64,
    config: &Config,
) -> Result<Solution<f64>, Error> {
    solve(map, seed, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::Status;

    const ROOT: f64 = 1.365_230_013_414_097;

    fn map(x: f64) -> f64 {
        (10.0 / (x + 4.0)).sqrt()
    }

    #[test]
    fn reaches_fixed_point_then_degenerates() {
        let solution = solve_unobserved(&map, 0.0, &Config::default()).expect("converges");

        // The third pass lands on the fixed point, so the fourth update divides by zero.
        assert_eq!(solution.status, Status::DegenerateStop);
        assert_eq!(solution.iters, 3);
        assert_relative_eq!(solution.x, ROOT, epsilon = 1e-12);
    }

    #[test]
    fn beats_plain_iteration() {
        let config = Config::default();
        let steffensen = solve_unobserved(&map, 0.0, &config).expect("converges");
        let plain = fixed_point::solve_unobserved(&map, 0.0, &config).expect("converges");

        assert!(steffensen.iters < plain.iters);
    }

    #[test]
    fn affine_map_lands_in_one_pass() {
        // Aitken extrapolation is exact for affine maps.
        let affine = |x: f64| 0.5 * x + 1.0;
        let mut events = Vec::new();
        let observer = |event: &Event<f64>| {
            events.push(*event);
            None
        };

        let solution = solve(&affine, 0.0, &Config::default(), observer).expect("converges");

        assert_relative_eq!(events[0].iterate, 2.0);
        assert_relative_eq!(solution.x, 2.0);
    }

    #[test]
    fn flat_step_on_first_pass_is_degenerate() {
        // m(x) = x + 1 has zero curvature everywhere.
        let solution =
            solve_unobserved(&|x: f64| x + 1.0, 0.0, &Config::default()).expect("stops cleanly");

        assert_eq!(solution.status, Status::DegenerateStop);
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 0.0);
    }

    #[test]
    fn map_leaving_its_domain_is_an_error() {
        let result = solve_unobserved(&|x: f64| (x - 10.0).sqrt(), 0.0, &Config::default());
        assert!(matches!(result, Err(Error::NonFiniteValue { .. })));
    }
}
