use crate::equation::Point;

/// Event emitted once per sectioning pass, after every sample is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<'a> {
    /// Pass counter (1-based).
    pub iter: usize,

    /// Ordered bracket that was sampled this pass.
    pub bracket: [f64; 2],

    /// The `n + 1` evaluated samples, left to right.
    pub samples: &'a [Point],

    /// First sample with the smallest `|f|`.
    pub best: Point,
}

impl Event<'_> {
    /// Returns the width of the sampled bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
