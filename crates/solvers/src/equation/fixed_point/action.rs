/// Actions an observer can take during a fixed-point solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the iterate just produced.
    StopEarly,
}
