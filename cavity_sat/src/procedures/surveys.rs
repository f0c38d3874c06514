/*!
Survey propagation.

# Overview

Each enabled edge *a→i* carries a survey: the probability that clause *a* warns variable *i* it is needed to satisfy the clause.
A run starts from uniformly random surveys and repeatedly sweeps the enabled edges in random order, recomputing each survey from the surveys around it, until a sweep moves no survey by [sp_epsilon](crate::config::Config::sp_epsilon) or more.

The recomputation of *a→i* walks the other edges *a→j* of the clause and, for each, the cavity of *j*: every other enabled edge *b→j*.
The products of *(1 − survey)* over the *b→j* which agree and disagree with *a→j* in polarity give the probabilities that *j* is warned towards or away from satisfying *a*, and their normalised combination is the contribution of *j* to the new survey.

# Degenerate cavities

When every message into the cavity is 1 both the numerator and denominator of the contribution vanish.
A 0/0 here means the cavity offers no warning at all, so the survey is set to 0 outright and the remaining contributions are skipped.

Surveys are only read between runs --- a run owns its edge order, and nothing is disabled while it iterates.
*/

use rand::seq::SliceRandom;

use crate::{
    context::GenericContext,
    graph::FactorGraph,
    misc::log::targets::{self},
    structures::edge::EdgeId,
};

/// What a run of survey propagation settled on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurveyOutcome {
    /// Whether every survey converged.
    pub converged: bool,

    /// The iterations taken.
    pub iterations: usize,
}

impl FactorGraph {
    /// The survey of the given edge, recomputed from the surveys around it.
    ///
    /// Reads the graph and writes nothing.
    pub fn refreshed_survey(&self, edge: EdgeId) -> f64 {
        let mut survey = 1.0;

        // Other literals of the clause: a→j, j ≠ i.
        let clause = self.edge(edge).clause;
        for other in self.clause_enabled_edges(clause) {
            if other == edge {
                continue;
            }

            let other_polarity = self.edge(other).polarity;
            let cavity_variable = self.edge(other).variable;

            // The cavity of j: every enabled b→j apart from a→j itself.
            let mut unsatisfying = 1.0;
            let mut satisfying = 1.0;
            let mut all = 1.0;

            for cavity_edge in self.variable_enabled_edges(cavity_variable) {
                if cavity_edge == other {
                    continue;
                }

                let held = 1.0 - self.edge(cavity_edge).survey;
                match self.edge(cavity_edge).polarity == other_polarity {
                    true => satisfying *= held,
                    false => unsatisfying *= held,
                }
                all *= held;
            }

            let warned_unsatisfying = (1.0 - unsatisfying) * satisfying;
            let warned_satisfying = (1.0 - satisfying) * unsatisfying;

            let contribution =
                warned_unsatisfying / (warned_unsatisfying + warned_satisfying + all);

            if contribution.is_nan() {
                return 0.0;
            }
            survey *= contribution;
        }

        survey
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Runs survey propagation to a fixed point, or to the iteration cap.
    ///
    /// Surveys of enabled edges are initialised uniformly at random from [0, 1), so a run forgets any earlier surveys.
    pub fn survey_propagation(&mut self) -> SurveyOutcome {
        let mut order = self.graph.enabled_edges();

        for &edge in &order {
            let initial = self.rng.random::<f64>();
            self.graph.edge_mut(edge).survey = initial;
        }

        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.config.sp_max_iterations && !converged {
            order.shuffle(&mut self.rng);

            converged = true;
            for &edge in &order {
                let previous = self.graph.edge(edge).survey;
                let refreshed = self.graph.refreshed_survey(edge);
                self.graph.edge_mut(edge).survey = refreshed;

                if (refreshed - previous).abs() >= self.config.sp_epsilon {
                    converged = false;
                }
            }

            iterations += 1;
        }

        match converged {
            true => log::info!(target: targets::SURVEYS, "Converged after {iterations} iterations"),
            false => log::warn!(target: targets::SURVEYS, "No fixed point within {iterations} iterations"),
        }

        self.counters.sp_runs += 1;
        self.counters.total_sp_iterations += iterations;

        SurveyOutcome {
            converged,
            iterations,
        }
    }
}
