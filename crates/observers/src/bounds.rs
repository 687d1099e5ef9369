//! Theoretical error bounds for comparing against measured convergence.
//!
//! Plot a [`Bound::series`] next to an [`ErrorTrace`](crate::ErrorTrace) on
//! a log scale to see whether a method decays as fast as theory promises.

/// An a priori bound on the error after `k` passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// N-section: the root stays inside a bracket of width `width / nᵏ`.
    Sectioning {
        /// Divisions per pass (`n`).
        divisions: usize,

        /// Width of the initial bracket.
        width: f64,
    },

    /// Contraction mapping: `Lᵏ / (1 − L) · |p₁ − p₀|`.
    ///
    /// Valid for fixed-point iteration of a map whose derivative is bounded
    /// by `L < 1` around the iterates.
    Contraction {
        /// Lipschitz constant `L` of the map.
        constant: f64,

        /// Length of the first step `|p₁ − p₀|`.
        first_step: f64,
    },
}

impl Bound {
    /// Returns the bound after `k` passes.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn at(&self, k: usize) -> f64 {
        let k = i32::try_from(k).unwrap_or(i32::MAX);
        match *self {
            Bound::Sectioning { divisions, width } => width / (divisions as f64).powi(k),
            Bound::Contraction {
                constant,
                first_step,
            } => constant.powi(k) / (1.0 - constant) * first_step,
        }
    }

    /// Returns `[k, bound]` for `k = 1..=iters`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn series(&self, iters: usize) -> Vec<[f64; 2]> {
        (1..=iters).map(|k| [k as f64, self.at(k)]).collect()
    }
}
