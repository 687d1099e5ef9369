use radix_core::Function;

use crate::equation::{EvalError, Point, Sign, evaluate};

/// Evaluated samples of one sectioning pass.
pub(super) struct Grid {
    points: Vec<Point>,
    best: Point,
}

impl Grid {
    /// Evaluates `n + 1` evenly spaced samples of `[left, right]`.
    ///
    /// The endpoints are sampled exactly; interior samples are
    /// `left·(n − i)/n + right·i/n`, weighted first so large brackets
    /// cannot overflow.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn sample<F: Function>(
        function: &F,
        [left, right]: [f64; 2],
        divisions: usize,
    ) -> Result<Self, EvalError<F::Error>> {
        let n = divisions as f64;

        let mut best = evaluate(function, left)?;
        let mut points = Vec::with_capacity(divisions + 1);
        points.push(best);

        for i in 1..=divisions {
            let x = if i == divisions {
                right
            } else {
                left * ((divisions - i) as f64 / n) + right * (i as f64 / n)
            };

            let point = evaluate(function, x)?;
            if point.fx.abs() < best.fx.abs() {
                best = point;
            }
            points.push(point);
        }

        Ok(Self { points, best })
    }

    /// Returns the samples, left to right.
    pub(super) fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the first sample with the smallest `|f|`.
    pub(super) fn best(&self) -> Point {
        self.best
    }

    /// Returns every adjacent sample pair with strictly opposite signs.
    pub(super) fn crossings(&self) -> Vec<[f64; 2]> {
        self.points
            .windows(2)
            .filter(|pair| Sign::is_opposite(pair[0].fx, pair[1].fx))
            .map(|pair| [pair[0].x, pair[1].x])
            .collect()
    }
}
