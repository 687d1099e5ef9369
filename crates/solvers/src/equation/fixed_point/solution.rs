use crate::equation::{State, Status};

/// The result of a fixed-point solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<S> {
    /// Final solver status.
    pub status: Status,

    /// Root estimate carried by the final state.
    pub x: f64,

    /// Final state; for two-point methods this holds both points.
    pub state: S,

    /// Number of completed passes.
    pub iters: usize,
}

impl<S: State> Solution<S> {
    pub(super) fn new(state: S, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: state.estimate(),
            state,
            iters,
        }
    }
}
