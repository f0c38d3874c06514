use crate::{config::Config, graph::FactorGraph, reports::Report};

use super::{ContextState, Counters};

/// A generic context, parameterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default](std::default::Default), so a source can stand in for the real one wherever a context is built piecemeal.
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a solve.
    pub counters: Counters,

    /// The factor graph of the formula.
    pub graph: FactorGraph,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A context over the given source of randomness.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            config,
            counters: Counters::default(),
            graph: FactorGraph::default(),
            state: ContextState::Configuration,
            rng,
        }
    }

    /// The high-level outcome of the context, distilled from its state.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }
}
