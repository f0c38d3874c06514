/*!
Break-count local search, in the style of WalkSAT.

# Overview

Each try starts by giving every unassigned variable a random value, then flips up to [walk_max_flips](crate::config::Config::walk_max_flips) variables.
A flip picks a random unsatisfied clause and scans its variables for break-counts: the number of currently satisfied clauses a flip of the variable would unsatisfy.
The scan stops early at a break-count of 0, and earlier variables win ties.
A zero-break variable is flipped outright; otherwise, with probability [walk_noise](crate::config::Config::walk_noise) a random variable of the clause is flipped instead of the best one.

The search runs on the residual formula: only enabled clauses steer it, and flips only touch variables reachable through enabled edges.
The search may revisit variables fixed by earlier decimation --- once surveys are trivial those choices hold no special status.
*/

use crate::{
    context::GenericContext,
    graph::FactorGraph,
    misc::log::targets::{self},
    structures::{clause::ClauseId, variable::VariableId},
};

/// How local search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The assignment on the graph satisfies the formula.
    Satisfied,

    /// Every try was exhausted.
    Exhausted,
}

impl FactorGraph {
    /// The number of currently satisfied clauses a flip of the variable would unsatisfy.
    ///
    /// The flip is made, counted against, and unmade, leaving the graph exactly as it was.
    pub fn break_count(&mut self, variable: VariableId, satisfied: &[ClauseId]) -> usize {
        let original = self.variable(variable).value;

        self.assign(variable, !original);
        let broken = satisfied
            .iter()
            .filter(|&&clause| !self.clause_is_sat(clause))
            .count();
        self.assign(variable, original);

        broken
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Searches for a satisfying assignment by randomised flips.
    pub fn walksat(&mut self) -> WalkOutcome {
        for _ in 0..self.config.walk_max_tries {
            self.counters.walk_tries += 1;

            for variable in self.graph.unassigned_variables() {
                let value = self.rng.random_bool(0.5);
                self.graph.assign(variable, value);
            }

            for _ in 0..self.config.walk_max_flips {
                if self.graph.is_sat() {
                    log::info!(target: targets::WALK, "Satisfied after {} flips", self.counters.walk_flips);
                    return WalkOutcome::Satisfied;
                }

                let mut satisfied = Vec::default();
                let mut unsatisfied = Vec::default();
                for clause in self.graph.enabled_clauses() {
                    match self.graph.clause_is_sat(clause) {
                        true => satisfied.push(clause),
                        false => unsatisfied.push(clause),
                    }
                }

                // Every enabled clause held, yet the full formula did not: some disabled clause
                // lost its satisfying variable to a flip. Flipping enabled literals cannot fix
                // that, so start over.
                if unsatisfied.is_empty() {
                    break;
                }

                let choice = self.rng.random_range(0..unsatisfied.len());
                let clause = unsatisfied[choice];
                let clause_edges = self.graph.clause_enabled_edges(clause).collect::<Vec<_>>();

                let mut best_variable = None;
                let mut best_break = usize::MAX;
                for &edge in &clause_edges {
                    let variable = self.graph.edge(edge).variable;
                    let broken = self.graph.break_count(variable, &satisfied);

                    if best_variable.is_none() || broken < best_break {
                        best_variable = Some(variable);
                        best_break = broken;
                    }

                    if broken == 0 {
                        break;
                    }
                }

                let Some(best_variable) = best_variable else {
                    break;
                };

                let flipped = match best_break {
                    0 => best_variable,
                    _ => match self.rng.random::<f64>() > self.config.walk_noise {
                        true => best_variable,
                        false => {
                            let random_edge = clause_edges[self.rng.random_range(0..clause_edges.len())];
                            self.graph.edge(random_edge).variable
                        }
                    },
                };

                let value = self.graph.variable(flipped).value;
                self.graph.assign(flipped, !value);
                self.counters.walk_flips += 1;
            }

            if self.graph.is_sat() {
                return WalkOutcome::Satisfied;
            }
        }

        log::info!(target: targets::WALK, "Exhausted after {} tries", self.counters.walk_tries);
        WalkOutcome::Exhausted
    }
}
