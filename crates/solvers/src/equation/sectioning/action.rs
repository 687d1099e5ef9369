/// Actions an observer can request from a sectioning solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the current pass's best sample.
    StopEarly,
}
