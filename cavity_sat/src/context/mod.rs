//! The context --- to which a formula is added and within which a solve takes place.
//!
//! Strictly, a [GenericContext] and a [Context].
//!
//! The generic context is generic over its source of randomness, while [Context] fixes the source to the library's [Pcg32](crate::generic::pcg::Pcg32) so a context can be built from a [Config](crate::config::Config) alone.

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// A fresh context, without a formula.
    Configuration,

    /// A formula has been added and no solve has concluded.
    Input,

    /// A solve is underway.
    Solving,

    /// A satisfying assignment is on the graph.
    Satisfiable,

    /// Forced assignments alone were contradictory, which refutes the formula.
    Unsatisfiable,

    /// The solve gave up, for the noted cause.
    ///
    /// The formula may still be satisfiable: decimation guesses, and a guess taints everything downstream of it.
    Unknown(FailureCause),
}

/// Why a solve gave up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureCause {
    /// Surveys were still moving when the iteration cap was hit.
    NonConvergence,

    /// Propagation found a contradiction downstream of a decimation step.
    Contradiction,

    /// Local search exhausted its tries.
    SearchExhausted,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown(cause) => write!(f, "Unknown ({cause})"),
        }
    }
}

impl std::fmt::Display for FailureCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonConvergence => write!(f, "surveys did not converge"),
            Self::Contradiction => write!(f, "propagation found a contradiction"),
            Self::SearchExhausted => write!(f, "local search was exhausted"),
        }
    }
}
