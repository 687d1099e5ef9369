use radix_core::Observer;
use radix_solvers::equation::Iterate;

use crate::traits::HasIterate;

/// Records every iterate a solver produces, in order.
///
/// Pass `&mut History` as the observer so the record stays available after
/// the solve. The seed is not an event, so it is not recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    iterates: Vec<Iterate>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded iterates.
    #[must_use]
    pub fn iterates(&self) -> &[Iterate] {
        &self.iterates
    }

    /// Returns the root estimate of each recorded iterate.
    pub fn estimates(&self) -> impl Iterator<Item = f64> + '_ {
        self.iterates.iter().map(Iterate::estimate)
    }

    /// Returns the number of recorded iterates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }
}

impl<E: HasIterate, A> Observer<E, A> for History {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.iterates.push(event.iterate());
        None
    }
}

impl<E: HasIterate, A> Observer<E, A> for &mut History {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
