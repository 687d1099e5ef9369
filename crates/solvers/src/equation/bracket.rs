use thiserror::Error;

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,

    /// Function values at the endpoints share a strict sign.
    #[error("no sign change")]
    NoSignChange,
}

/// The strict sign of a function value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Value is strictly negative.
    Negative,

    /// Value is exactly zero.
    Zero,

    /// Value is strictly positive.
    Positive,
}

impl Sign {
    /// Returns the sign of a value.
    ///
    /// NaN is treated as [`Sign::Zero`]; solvers reject non-finite values
    /// before asking for a sign.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Returns true if `a * b < 0`.
    ///
    /// Compares signs instead of multiplying so tiny values cannot underflow
    /// to a zero product.
    #[must_use]
    pub fn is_opposite(a: f64, b: f64) -> bool {
        matches!(
            (Sign::of(a), Sign::of(b)),
            (Sign::Negative, Sign::Positive) | (Sign::Positive, Sign::Negative)
        )
    }

    /// Returns true if `a * b > 0`.
    #[must_use]
    pub fn is_same(a: f64, b: f64) -> bool {
        matches!(
            (Sign::of(a), Sign::of(b)),
            (Sign::Negative, Sign::Negative) | (Sign::Positive, Sign::Positive)
        )
    }
}

/// Ordered finite bounds of a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    pub(super) left: f64,
    pub(super) right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth);
        }

        let (left, right) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { left, right })
    }
}
