//! Generalized N-section search for roots of `f(x) = 0`.
//!
//! # Algorithm
//!
//! Starting from a bracket `[a, b]` with a sign change, each pass samples
//! `n + 1` evenly spaced points (both endpoints included), evaluates the
//! function at all of them, and takes the first sample with the smallest
//! `|f|` as the current root estimate. If that estimate is within tolerance
//! the solve converges. Otherwise the bracket is replaced by the one
//! sub-segment whose endpoints have strictly opposite signs, so the width
//! shrinks by exactly `1/n` per pass.
//!
//! [`bisection`](super::bisection) and [`trisection`](super::trisection) fix
//! `n` at 2 and 3.
//!
//! # Termination
//!
//! - [`Status::Converged`] — an endpoint or a sample satisfies `|f| <= tolerance`
//! - [`Status::MaxIters`] — `max_iters - 1` passes ran; the last pass's best
//!   sample is returned
//! - [`Status::StoppedByObserver`] — the observer returned [`Action::StopEarly`]
//!
//! A pass that sees no sign change, or more than one, cannot pick a
//! sub-segment and fails with [`Error::MultipleOrNoRoot`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per pass, after all samples are evaluated
//! and before the tolerance check. No event is emitted when the initial
//! bracket check already finds a root or fails.

mod action;
mod error;
mod event;
mod grid;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use radix_core::{Function, Observer};

use crate::Config;

use super::{IntervalCheck, Point, Status, check_interval};

use grid::Grid;

/// Finds a root of `function` in `bracket` by splitting it into `divisions`
/// equal parts per pass.
///
/// # Errors
///
/// Returns an error if `divisions < 2`, the bracket is invalid, a pass cannot
/// choose a single sign change, or `function` fails or returns a non-finite
/// value.
///
/// # Example
///
/// ```
/// use radix_solvers::{Config, equation::{Status, sectioning}};
///
/// let f = |x: f64| x * x - 2.0;
/// let solution = sectioning::solve_unobserved(&f, [0.0, 2.0], 4, &Config::default()).unwrap();
///
/// assert_eq!(solution.status, Status::Converged);
/// assert!(solution.fx.abs() <= 1e-9);
/// ```
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    divisions: usize,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if divisions < 2 {
        return Err(Error::TooFewDivisions { divisions });
    }

    let (left, right) = match check_interval(function, bracket, config.tolerance())? {
        IntervalCheck::RootAtLeft(point) | IntervalCheck::RootAtRight(point) => {
            return Ok(Solution::new(point, Status::Converged, 0));
        }
        IntervalCheck::NoImmediateRoot { left, right } => (left, right),
    };

    let mut bracket = [left.x, right.x];
    let mut best = better(left, right);

    for iter in 1..=config.max_passes() {
        let grid = Grid::sample(function, bracket, divisions)?;
        best = grid.best();

        let event = Event {
            iter,
            bracket,
            samples: grid.points(),
            best,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(best, Status::StoppedByObserver, iter));
        }

        if best.fx.abs() <= config.tolerance() {
            return Ok(Solution::new(best, Status::Converged, iter));
        }

        bracket = match grid.crossings().as_slice() {
            [segment] => *segment,
            crossings => {
                return Err(Error::MultipleOrNoRoot {
                    bracket,
                    crossings: crossings.len(),
                });
            }
        };
    }

    Ok(Solution::new(best, Status::MaxIters, config.max_passes()))
}

/// Finds a root by N-section without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(
    function: &F,
    bracket: [f64; 2],
    divisions: usize,
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, bracket, divisions, config, ())
}

/// Returns the point with the smaller `|f|`, preferring `left` on ties.
fn better(left: Point, right: Point) -> Point {
    if right.fx.abs() < left.fx.abs() {
        right
    } else {
        left
    }
}
