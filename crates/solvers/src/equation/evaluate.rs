use thiserror::Error;

use radix_core::Function;

/// A point with its finite function value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The function value at x.
    pub fx: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, fx: f64) -> Self {
        Self { x, fx }
    }
}

/// Errors that can occur when evaluating a function.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The function call failed.
    #[error("function call failed")]
    Function(#[source] E),

    /// The function returned NaN or an infinity.
    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },
}

/// Evaluates `function` at `x`, rejecting non-finite values.
///
/// # Errors
///
/// Returns an error if the function call fails or its value is not finite.
pub fn evaluate<F: Function>(function: &F, x: f64) -> Result<Point, EvalError<F::Error>> {
    let fx = function.call(x).map_err(EvalError::Function)?;
    if !fx.is_finite() {
        return Err(EvalError::NonFinite { x, value: fx });
    }
    Ok(Point::new(x, fx))
}
