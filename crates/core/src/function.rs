use std::convert::Infallible;

/// A scalar function `f: ℝ → ℝ` supplied by the caller.
///
/// Solvers only ever invoke functions; they never construct them. A function
/// is expected to be pure, since solvers re-evaluate it freely and keep no
/// cache of previous values.
///
/// Any `Fn(f64) -> f64` closure is a `Function` that cannot fail. Implement
/// the trait directly when evaluation can fail, for example when the function
/// is backed by a lookup table with a limited domain.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

/// Blanket implementation for infallible closures.
impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
