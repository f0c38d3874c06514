use crate::{config::Config, generic::pcg::Pcg32};

use rand::SeedableRng;

use super::GenericContext;

/// A context which uses [Pcg32] as its source of randomness.
pub type Context = GenericContext<Pcg32>;

impl Context {
    /// Creates a context from some given configuration, seeding the generator from the configuration.
    pub fn from_config(config: Config) -> Self {
        let rng = Pcg32::from_seed(config.seed.to_le_bytes());
        Self::from_config_and_rng(config, rng)
    }
}
