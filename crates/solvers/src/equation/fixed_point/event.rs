/// Event emitted by the fixed-point loop after each successful update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<S> {
    /// Pass counter (1-based).
    pub iter: usize,

    /// State the update rule was applied to.
    pub previous: S,

    /// State produced by the update rule.
    pub iterate: S,
}
