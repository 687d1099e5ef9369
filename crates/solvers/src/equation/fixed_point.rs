//! Generic fixed-point iteration.
//!
//! # Algorithm
//!
//! Starting from a seed state `p`, each pass computes `next = g(p)` with an
//! update rule `g` and compares the estimates of `p` and `next`. The solve
//! converges once they differ by less than the configured tolerance, and the
//! new state `next` is returned.
//!
//! The loop is shared by every fixed-point method in this crate. Methods
//! differ only in the update rule they pass to [`iterate`]:
//!
//! | method | state | rule |
//! |---|---|---|
//! | [`solve`] | `f64` | caller-supplied map |
//! | [`newton`](super::newton) | `f64` | [`newton_step`](super::update::newton_step) |
//! | [`secant`](super::secant) | `[f64; 2]` | [`secant_step`](super::update::secant_step) |
//! | [`regula_falsi`](super::regula_falsi) | `[f64; 2]` | [`regula_falsi_step`](super::update::regula_falsi_step) |
//! | [`steffensen`](super::steffensen) | `f64` | [`steffensen_step`](super::update::steffensen_step) |
//!
//! # Termination
//!
//! - [`Status::Converged`] — consecutive estimates agree within tolerance
//! - [`Status::DegenerateStop`] — the rule returned [`Update::Degenerate`];
//!   the last valid state is returned
//! - [`Status::MaxIters`] — `max_iters - 1` passes ran without converging
//! - [`Status::StoppedByObserver`] — the observer returned [`Action::StopEarly`]
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per pass that produced a new state, before
//! the convergence test.

mod action;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use radix_core::{Function, Observer};

use crate::Config;

use super::{State, Status, Update, evaluate};

/// Iterates `update` from `seed` until consecutive estimates agree.
///
/// `iters` in the returned solution counts completed passes: a pass that
/// ends in [`Update::Degenerate`] is not counted.
///
/// # Errors
///
/// Returns an error if `update` fails or produces a non-finite state.
pub fn iterate<S, U, Obs>(
    seed: S,
    mut update: U,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: State,
    U: FnMut(S) -> Result<Update<S>, Error>,
    Obs: Observer<Event<S>, Action>,
{
    let mut state = seed;

    for iter in 1..=config.max_passes() {
        let next = match update(state)? {
            Update::Next(next) => next,
            Update::Degenerate => {
                return Ok(Solution::new(state, Status::DegenerateStop, iter - 1));
            }
        };

        if !next.all_finite() {
            return Err(Error::NonFiniteIterate { iter });
        }

        let event = Event {
            iter,
            previous: state,
            iterate: next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(next, Status::StoppedByObserver, iter));
        }

        let step = (next.estimate() - state.estimate()).abs();
        state = next;

        if step < config.tolerance() {
            return Ok(Solution::new(state, Status::Converged, iter));
        }
    }

    Ok(Solution::new(state, Status::MaxIters, config.max_passes()))
}

/// Finds a fixed point `p = map(p)` by plain iteration from `seed`.
///
/// # Errors
///
/// Returns an error if `map` fails or returns a non-finite value.
///
/// # Example
///
/// ```
/// use radix_solvers::{Config, equation::{Status, fixed_point}};
///
/// let map = |x: f64| (10.0 / (x + 4.0)).sqrt();
/// let solution = fixed_point::solve_unobserved(&map, 0.0, &Config::default()).unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!((solution.x - 1.365_230_013).abs() < 1e-8);
/// ```
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
    iterate(
        seed,
        |x| Ok(Update::Next(evaluate(map, x)?.fx)),
        config,
        observer,
    )
}

/// Finds a fixed point without observer support.
///
/// # Errors
///
/// Returns an error if `map` fails or returns a non-finite value.
pub fn solve_unobserved<M: Function>(
    map: &M,
    seed: f64,
    config: &Config,
) -> Result<Solution<f64>, Error> {
    solve(map, seed, config, ())
}
