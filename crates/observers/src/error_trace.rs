use radix_core::Observer;

use crate::traits::HasIterate;

/// Records the absolute error `|true_root − estimate|` of every iterate.
///
/// Useful for studying convergence on problems with a known root. Like
/// [`History`](crate::History), it never asks the solver to act.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorTrace {
    true_root: f64,
    entries: Vec<(usize, f64)>,
}

impl ErrorTrace {
    /// Creates an empty trace measuring errors against `true_root`.
    #[must_use]
    pub fn new(true_root: f64) -> Self {
        Self {
            true_root,
            entries: Vec::new(),
        }
    }

    /// Returns the reference root.
    #[must_use]
    pub fn true_root(&self) -> f64 {
        self.true_root
    }

    /// Returns the recorded errors, in pass order.
    pub fn errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|&(_, error)| error)
    }

    /// Returns `[iter, error]` pairs ready for plotting.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.entries
            .iter()
            .map(|&(iter, error)| [iter as f64, error])
            .collect()
    }

    /// Returns the error of the last recorded iterate.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.entries.last().map(|&(_, error)| error)
    }
}

impl<E: HasIterate, A> Observer<E, A> for ErrorTrace {
    fn observe(&mut self, event: &E) -> Option<A> {
        let error = (self.true_root - event.estimate()).abs();
        self.entries.push((event.iter(), error));
        None
    }
}

impl<E: HasIterate, A> Observer<E, A> for &mut ErrorTrace {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
