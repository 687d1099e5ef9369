//! Update rules plugged into [`fixed_point::iterate`](super::fixed_point::iterate).
//!
//! Each rule returns [`Update::Degenerate`] instead of dividing by an exact
//! zero. Function errors and non-finite function values propagate as
//! [`fixed_point::Error`](super::fixed_point::Error).

use radix_core::Function;

use super::{Sign, evaluate, fixed_point::Error};

/// Result of applying an update rule to the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Update<S> {
    /// The rule produced the next state.
    Next(S),

    /// The rule's denominator vanished, so no next state exists.
    Degenerate,
}

impl<S> Update<S> {
    /// Maps the next state, leaving a degenerate update unchanged.
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Update<T> {
        match self {
            Update::Next(state) => Update::Next(f(state)),
            Update::Degenerate => Update::Degenerate,
        }
    }
}

/// Newton's rule: `x − f(x) / f′(x)`.
///
/// # Errors
///
/// Returns an error if `function` or `derivative` fails or is non-finite at `x`.
pub fn newton_step<F, D>(function: &F, derivative: &D, x: f64) -> Result<Update<f64>, Error>
where
    F: Function,
    D: Function,
{
    let fx = evaluate(function, x)?.fx;
    let dfx = evaluate(derivative, x)?.fx;

    #[allow(clippy::float_cmp)]
    if dfx == 0.0 {
        return Ok(Update::Degenerate);
    }

    Ok(Update::Next(x - fx / dfx))
}

/// Secant rule: `x₁ − f(x₁)·(x₁ − x₀) / (f(x₁) − f(x₀))`.
///
/// # Errors
///
/// Returns an error if `function` fails or is non-finite at either point.
pub fn secant_step<F: Function>(function: &F, pair: [f64; 2]) -> Result<Update<f64>, Error> {
    let [x0, x1] = pair;
    let f0 = evaluate(function, x0)?.fx;
    let f1 = evaluate(function, x1)?.fx;

    let slope = f1 - f0;
    #[allow(clippy::float_cmp)]
    if slope == 0.0 {
        return Ok(Update::Degenerate);
    }

    Ok(Update::Next(x1 - f1 * (x1 - x0) / slope))
}

/// Regula falsi rule.
///
/// Computes the secant point `c` of `(x₀, x₁)` and returns `(x₁, c)` when
/// `f(c)` and `f(x₁)` have strictly opposite signs, `(x₀, c)` otherwise, so
/// the returned pair keeps a sign change whenever the input pair had one.
///
/// # Errors
///
/// Returns an error if `function` fails or is non-finite at any point.
pub fn regula_falsi_step<F: Function>(
    function: &F,
    pair: [f64; 2],
) -> Result<Update<[f64; 2]>, Error> {
    let [x0, x1] = pair;
    let Update::Next(c) = secant_step(function, pair)? else {
        return Ok(Update::Degenerate);
    };

    let fc = evaluate(function, c)?.fx;
    let f1 = evaluate(function, x1)?.fx;

    if Sign::is_opposite(fc, f1) {
        Ok(Update::Next([x1, c]))
    } else {
        Ok(Update::Next([x0, c]))
    }
}

/// Steffensen's rule for a fixed-point map `m`:
/// `x − (m(x) − x)² / (m(m(x)) − 2·m(x) + x)`.
///
/// # Errors
///
/// Returns an error if `map` fails or is non-finite at `x` or `m(x)`.
pub fn steffensen_step<M: Function>(map: &M, x: f64) -> Result<Update<f64>, Error> {
    let m1 = evaluate(map, x)?.fx;
    let m2 = evaluate(map, m1)?.fx;

    let curvature = m2 - 2.0 * m1 + x;
    #[allow(clippy::float_cmp)]
    if curvature == 0.0 {
        return Ok(Update::Degenerate);
    }

    Ok(Update::Next(x - (m1 - x).powi(2) / curvature))
}
