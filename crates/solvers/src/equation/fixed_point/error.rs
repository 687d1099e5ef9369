use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

/// Errors that can occur during a fixed-point solve.
#[derive(Debug, Error)]
pub enum Error {
    #[error("derivative is zero at seed x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("secant slope is zero at seed ({x0}, {x1})")]
    ZeroSecantSlope { x0: f64, x1: f64 },

    #[error("update produced a non-finite iterate at pass {iter}")]
    NonFiniteIterate { iter: usize },

    #[error("function call failed")]
    Function(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}

impl<E> From<EvalError<E>> for Error
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
