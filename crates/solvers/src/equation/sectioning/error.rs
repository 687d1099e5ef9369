use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::{BracketError, EvalError, IntervalError};

/// Errors that can occur during a sectioning solve.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("at least 2 divisions are required, got {divisions}")]
    TooFewDivisions { divisions: usize },

    /// The sampled bracket had zero or several sign changes, so no single
    /// sub-segment can be kept.
    #[error("{crossings} sign changes in [{}, {}]", .bracket[0], .bracket[1])]
    MultipleOrNoRoot { bracket: [f64; 2], crossings: usize },

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

impl From<IntervalError> for Error {
    fn from(err: IntervalError) -> Self {
        match err {
            IntervalError::InvalidBracket(e) => Self::InvalidBracket(e),
            IntervalError::Function(e) => Self::Function(e),
            IntervalError::NonFiniteValue { x, value } => Self::NonFiniteValue { x, value },
        }
    }
}
