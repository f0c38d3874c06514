/*!
Configuration of a context.

All the knobs which bound a solve live here.
There is no runtime reconfiguration: a config is read when the context is built and consulted during the solve.
*/

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The cap on fixed-point iterations of a single survey propagation run.
    ///
    /// Hitting the cap without convergence fails the solve.
    pub sp_max_iterations: usize,

    /// Convergence tolerance for surveys.
    ///
    /// An edge has converged when its survey moved less than this in the last iteration.
    pub sp_epsilon: f64,

    /// The number of fresh random assignments local search may start from.
    pub walk_max_tries: usize,

    /// The number of flips to make from each starting assignment.
    pub walk_max_flips: usize,

    /// The random-walk probability of local search, in [0, 1].
    ///
    /// With this probability a flip ignores break-counts and picks a random variable of the chosen clause.
    pub walk_noise: f64,

    /// The fraction of unassigned variables fixed by each decimation step.
    ///
    /// At least one variable is always fixed, so any value in (0, 1] terminates.
    pub fraction: f64,

    /// The seed of the context's random number generator.
    ///
    /// A fixed seed reproduces a solve end-to-end.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sp_max_iterations: 1000,
            sp_epsilon: 0.001,
            walk_max_tries: 100,
            walk_max_flips: 1000,
            walk_noise: 0.57,
            fraction: 0.04,
            seed: 0,
        }
    }
}
