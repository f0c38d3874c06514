/*!
Unit propagation.

# Overview

A unit clause --- an enabled clause with exactly one enabled edge --- forces its variable: only the polarity of that edge can satisfy the clause.
Propagation runs the following to a fixed point:

1. Sweep every enabled clause against the assignment: a clause with a satisfied literal is disabled, a falsified literal loses its edge.
   A clause which stays enabled with no enabled edges has lost every literal, a contradiction.
2. Collect every unit clause. None left means a fixed point.
3. Force the variable of each unit clause. A variable already assigned against the forced polarity is a contradiction.

The sweep's dual action is what feeds the next round: pruning falsified edges is exactly what turns 2-literal clauses into fresh units.
Sweeping first also settles any assignments the caller made since the last round --- in particular, a decimation step which emptied a clause outright is caught here rather than mistaken for a fixed point.

After a sweep every enabled edge leads to an unassigned variable, so each forced variable is fresh and the loop assigns strictly more variables per round until it settles or contradicts.
Two unit clauses may force the same variable in one round; when their polarities agree the second force is a no-op.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
};

/// How a round of propagation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// No unit clauses remain.
    Fixpoint,

    /// A variable was forced both ways, or a clause lost every literal.
    Contradiction,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Runs unit propagation over the enabled view of the graph.
    pub fn unit_propagation(&mut self) -> PropagationOutcome {
        loop {
            for clause in self.graph.enabled_clauses() {
                for edge in self.graph.clause_enabled_edges(clause).collect::<Vec<_>>() {
                    let variable = self.graph.edge(edge).variable;
                    if !self.graph.variable(variable).assigned {
                        continue;
                    }

                    match self.graph.edge(edge).polarity == self.graph.variable(variable).value {
                        true => {
                            self.graph.disable_clause(clause);
                            break;
                        }
                        false => self.graph.disable_edge(edge),
                    }
                }

                if self.graph.clause(clause).enabled
                    && self.graph.clause_enabled_edge_count(clause) == 0
                {
                    log::info!(target: targets::PROPAGATION, "Clause {clause} lost every literal");
                    return PropagationOutcome::Contradiction;
                }
            }

            let unit_clauses = self
                .graph
                .enabled_clauses()
                .into_iter()
                .filter(|&clause| self.graph.clause_enabled_edge_count(clause) == 1)
                .collect::<Vec<_>>();

            if unit_clauses.is_empty() {
                return PropagationOutcome::Fixpoint;
            }

            for clause in unit_clauses {
                let Some(edge) = self.graph.clause_enabled_edges(clause).next() else {
                    continue;
                };

                let polarity = self.graph.edge(edge).polarity;
                let variable = self.graph.edge(edge).variable;

                match self.graph.variable(variable).assigned {
                    false => {
                        log::trace!(target: targets::PROPAGATION, "Forced {} to {polarity}", variable + 1);
                        self.graph.assign(variable, polarity);
                    }
                    true => {
                        if self.graph.variable(variable).value != polarity {
                            log::info!(target: targets::PROPAGATION, "Contradiction on {}", variable + 1);
                            return PropagationOutcome::Contradiction;
                        }
                    }
                }
            }
        }
    }
}
