use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// Survey propagation iterations, accumulated over every run of a solve.
    pub total_sp_iterations: usize,

    /// The number of survey propagation runs.
    pub sp_runs: usize,

    /// The number of variables fixed by decimation.
    pub decimations: usize,

    /// The number of fresh starting assignments local search took.
    pub walk_tries: usize,

    /// The number of flips local search made.
    pub walk_flips: usize,

    /// The time taken by the solve.
    pub time: Duration,
}
