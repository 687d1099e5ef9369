/// Why a solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// An update rule hit a zero denominator mid-solve.
    ///
    /// This usually means the attainable floating-point precision is
    /// exhausted, so the last valid iterate is returned.
    /// Only the fixed-point family reports this status.
    DegenerateStop,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}
