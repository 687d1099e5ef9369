use radix_core::Observer;
use tracing::debug;

use crate::traits::HasIterate;

/// Emits one `tracing` debug record per solver pass.
///
/// Records carry the solver label plus structured `iter` and `estimate`
/// fields under the `radix` target. Install a subscriber (for example
/// `tracing_subscriber::fmt`) to see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tracing {
    solver: &'static str,
}

impl Tracing {
    /// Creates an observer that labels its records with `solver`.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver }
    }
}

impl<E: HasIterate, A> Observer<E, A> for Tracing {
    fn observe(&mut self, event: &E) -> Option<A> {
        debug!(
            target: "radix",
            solver = self.solver,
            iter = event.iter(),
            estimate = event.estimate(),
            "pass"
        );
        None
    }
}
