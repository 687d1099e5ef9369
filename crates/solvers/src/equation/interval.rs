use std::error::Error as StdError;

use thiserror::Error;

use radix_core::Function;

use super::{
    BracketError, EvalError, Point, Sign,
    bracket::Bounds,
    evaluate::evaluate,
};

/// Outcome of [`check_interval`] for a valid bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntervalCheck {
    /// The left endpoint already satisfies the tolerance.
    RootAtLeft(Point),

    /// The right endpoint already satisfies the tolerance.
    RootAtRight(Point),

    /// Neither endpoint is a root; the bracket holds a sign change.
    NoImmediateRoot { left: Point, right: Point },
}

/// Errors that can occur when checking a bracket.
#[derive(Debug, Error)]
pub enum IntervalError {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("function call failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}

impl<E> From<EvalError<E>> for IntervalError
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<E>) -> Self {
        match err {
            EvalError::Function(e) => Self::Function(Box::new(e)),
            EvalError::NonFinite { x, value } => Self::NonFiniteValue { x, value },
        }
    }
}

/// Checks that `bracket` can seed a bracketing solver.
///
/// The endpoints are reordered if needed, then each is evaluated once.
/// The left endpoint is tested against `tolerance` before the right one.
///
/// # Errors
///
/// Returns [`BracketError::NoSignChange`] if `f(a)` and `f(b)` share a strict
/// sign, another [`BracketError`] for non-finite or equal endpoints, and a
/// function error if either evaluation fails.
///
/// # Example
///
/// ```
/// use radix_solvers::equation::{IntervalCheck, check_interval};
///
/// let f = |x: f64| x * x - 4.0;
/// let check = check_interval(&f, [0.0, 2.0], 1e-9).unwrap();
/// assert!(matches!(check, IntervalCheck::RootAtRight(p) if p.x == 2.0));
/// ```
pub fn check_interval<F: Function>(
    function: &F,
    bracket: [f64; 2],
    tolerance: f64,
) -> Result<IntervalCheck, IntervalError> {
    let bounds = Bounds::new(bracket)?;

    let left = evaluate(function, bounds.left)?;
    let right = evaluate(function, bounds.right)?;

    if Sign::is_same(left.fx, right.fx) {
        return Err(BracketError::NoSignChange.into());
    }

    if left.fx.abs() <= tolerance {
        Ok(IntervalCheck::RootAtLeft(left))
    } else if right.fx.abs() <= tolerance {
        Ok(IntervalCheck::RootAtRight(right))
    } else {
        Ok(IntervalCheck::NoImmediateRoot { left, right })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    fn cubic(x: f64) -> f64 {
        x.powi(3) + 4.0 * x.powi(2) - 10.0
    }

    #[test]
    fn sign_change_without_endpoint_root() {
        let check = check_interval(&cubic, [0.0, 5.0], 1e-9).expect("valid bracket");

        let IntervalCheck::NoImmediateRoot { left, right } = check else {
            panic!("unexpected endpoint root: {check:?}");
        };
        assert_relative_eq!(left.fx, -10.0);
        assert_relative_eq!(right.fx, 215.0);
    }

    #[test]
    fn reversed_bracket_is_reordered() {
        let check = check_interval(&cubic, [5.0, 0.0], 1e-9).expect("valid bracket");

        let IntervalCheck::NoImmediateRoot { left, right } = check else {
            panic!("unexpected endpoint root: {check:?}");
        };
        assert_relative_eq!(left.x, 0.0);
        assert_relative_eq!(right.x, 5.0);
    }

    #[test]
    fn left_endpoint_root_is_checked_first() {
        // Both endpoints are roots of x² - 1.
        let check = check_interval(&|x: f64| x * x - 1.0, [-1.0, 1.0], 1e-12).expect("valid");
        assert!(matches!(check, IntervalCheck::RootAtLeft(p) if p.x == -1.0));
    }

    #[test]
    fn right_endpoint_root_within_tolerance() {
        let check = check_interval(&|x: f64| x - 1.0 + 1e-12, [0.0, 1.0], 1e-9).expect("valid");
        assert!(matches!(check, IntervalCheck::RootAtRight(p) if p.x == 1.0));
    }

    #[test]
    fn rejects_bracket_without_sign_change() {
        let result = check_interval(&|x: f64| x * x + 1.0, [0.0, 1.0], 1e-9);
        assert!(matches!(
            result,
            Err(IntervalError::InvalidBracket(BracketError::NoSignChange))
        ));
    }

    #[test]
    fn evaluates_each_endpoint_once() {
        let calls = Cell::new(0);
        let counted = |x: f64| {
            calls.set(calls.get() + 1);
            cubic(x)
        };

        check_interval(&counted, [0.0, 5.0], 1e-9).expect("valid bracket");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn reports_non_finite_values() {
        let result = check_interval(&|x: f64| x.ln(), [-1.0, 2.0], 1e-9);
        assert!(matches!(result, Err(IntervalError::NonFiniteValue { .. })));
    }
}
