/// An iterate of a fixed-point solver, tagged by the shape of its state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Iterate {
    /// A single point, as used by Newton, Steffensen and plain fixed point.
    Scalar(f64),

    /// The last two points, as used by secant and regula falsi.
    Pair([f64; 2]),
}

impl Iterate {
    /// Returns the root estimate carried by this iterate.
    ///
    /// For a pair this is the most recent point.
    #[must_use]
    pub fn estimate(&self) -> f64 {
        match self {
            Iterate::Scalar(x) => *x,
            Iterate::Pair([_, x]) => *x,
        }
    }
}

/// State carried from one fixed-point iteration to the next.
///
/// Implemented for `f64` (scalar methods) and `[f64; 2]` (two-point methods).
/// Convergence compares [`State::estimate`] of consecutive states.
pub trait State: Copy {
    /// Returns the root estimate carried by this state.
    fn estimate(&self) -> f64;

    /// Returns true if every component is finite.
    fn all_finite(&self) -> bool;

    /// Returns the tagged form of this state.
    fn to_iterate(self) -> Iterate;
}

impl State for f64 {
    fn estimate(&self) -> f64 {
        *self
    }

    fn all_finite(&self) -> bool {
        self.is_finite()
    }

    fn to_iterate(self) -> Iterate {
        Iterate::Scalar(self)
    }
}

impl State for [f64; 2] {
    fn estimate(&self) -> f64 {
        self[1]
    }

    fn all_finite(&self) -> bool {
        self.iter().all(|x| x.is_finite())
    }

    fn to_iterate(self) -> Iterate {
        Iterate::Pair(self)
    }
}
