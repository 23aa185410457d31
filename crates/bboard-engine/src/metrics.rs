//! Per-tick metrics collected by the match driver.

/// Timing and event counts for a single tick.
///
/// Populated by [`Environment::step`](crate::env::Environment::step);
/// read back through [`Environment::last_metrics`](crate::env::Environment::last_metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole tick including move collection, in
    /// microseconds.
    pub total_us: u64,
    /// Time spent inside the transition function, in microseconds.
    pub transition_us: u64,
    /// Agents that missed the decision deadline this tick.
    pub timeouts: u32,
    /// Bombs that went off this tick, chained ones included.
    pub explosions: u32,
    /// Agents that died this tick.
    pub deaths: u32,
}
