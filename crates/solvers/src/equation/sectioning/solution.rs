use crate::equation::{Point, Status};

/// The result of a sectioning solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Number of completed passes.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(point: Point, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: point.x,
            fx: point.fx,
            iters,
        }
    }
}
