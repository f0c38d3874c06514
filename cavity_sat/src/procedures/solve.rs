/*!
The decimation loop which determines (one-sided) satisfiability of the formula in a context.

# Overview

A solve interleaves the other procedures:

```none
          +-------------------+
          | unit propagation  |----> unsatisfiable, on an initial contradiction
          +-------------------+
                    |
                    ⌄
  +---->+--------------------------+
  |     |  survey propagation      |----> unknown, if no fixed point is reached
  |     +--------------------------+
  |                 |
  |                 | all surveys trivial?
  |                 |
  |                 +----yes----> local search -----> satisfiable / unknown
  |                 ⌄
  |     +--------------------------+
  |     | rank biases and decimate |
  |     +--------------------------+
  |                 |
  |                 ⌄
  |     +--------------------------+
  |     |    unit propagation      |----> unknown, on a contradiction
  |     +--------------------------+
  |                 |
  +-------no-------SAT?-----yes--------> satisfiable
```

Forced assignments are applied before the first survey run, so formulas settled by unit
propagation alone never pay for a survey run, and a contradiction at that point refutes the
formula outright --- no guess was involved.
Afterwards every failure is downstream of a decimation guess and proves nothing.

# Decimation

Each round ranks the unassigned variables by the magnitude of their [bias](crate::procedures::bias) and fixes the top [fraction](crate::config::Config::fraction) of them (never fewer than one) to their preferred polarity.
Ranking breaks ties by variable id, keeping a solve reproducible under a fixed seed.
Each fixed variable is simplified into the graph at once: clauses its value satisfies are disabled, edges its value falsifies are pruned.
*/

use std::time::Instant;

use crate::{
    context::{ContextState, FailureCause, GenericContext},
    misc::log::targets::{self},
    procedures::{propagation::PropagationOutcome, walk::WalkOutcome},
    reports::Report,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Solves the formula of the context with the configured decimation fraction.
    pub fn solve(&mut self) -> Report {
        let fraction = self.config.fraction;
        self.solve_with_fraction(fraction)
    }

    /// Solves the formula of the context, fixing the given fraction of unassigned variables per decimation round.
    ///
    /// The solver is one-sided: [Satisfiable](Report::Satisfiable) comes with an assignment on the graph, while
    /// [Unknown](Report::Unknown) leaves satisfiability open and only [Unsatisfiable](Report::Unsatisfiable)
    /// --- a contradiction among forced assignments --- refutes the formula.
    pub fn solve_with_fraction(&mut self, fraction: f64) -> Report {
        match self.state {
            ContextState::Configuration | ContextState::Input => {}
            // A concluded or interrupted solve is not resumed.
            _ => return self.report(),
        }

        self.state = ContextState::Solving;
        let timer = Instant::now();

        self.state = 'solve: {
            // Forced structure first: unit clauses are proof, not guesses.
            match self.unit_propagation() {
                PropagationOutcome::Contradiction => break 'solve ContextState::Unsatisfiable,
                PropagationOutcome::Fixpoint => {}
            }
            if self.graph.is_sat() {
                break 'solve ContextState::Satisfiable;
            }

            loop {
                let surveys = self.survey_propagation();
                if !surveys.converged {
                    break 'solve ContextState::Unknown(FailureCause::NonConvergence);
                }

                let trivial = self
                    .graph
                    .enabled_edges()
                    .into_iter()
                    .all(|edge| self.graph.edge(edge).survey == 0.0);
                if trivial {
                    log::info!(target: targets::DECIMATION, "Trivial surveys, falling back to local search");
                    match self.walksat() {
                        WalkOutcome::Satisfied => break 'solve ContextState::Satisfiable,
                        WalkOutcome::Exhausted => {
                            break 'solve ContextState::Unknown(FailureCause::SearchExhausted)
                        }
                    }
                }

                self.decimate(fraction);

                match self.unit_propagation() {
                    PropagationOutcome::Contradiction => {
                        break 'solve ContextState::Unknown(FailureCause::Contradiction)
                    }
                    PropagationOutcome::Fixpoint => {}
                }

                if self.graph.is_sat() {
                    break 'solve ContextState::Satisfiable;
                }
            }
        };

        self.counters.time = timer.elapsed();
        log::info!(target: targets::DECIMATION, "Solve concluded: {} in {:?}", self.state, self.counters.time);

        self.report()
    }

    /// Fixes the most biased fraction of unassigned variables to their preferred polarity.
    fn decimate(&mut self, fraction: f64) {
        let mut unassigned = self.graph.unassigned_variables();

        for &variable in &unassigned {
            self.graph.evaluate_bias(variable);
        }

        unassigned.sort_by(|&left, &right| {
            let left_bias = self.graph.variable(left).bias.abs();
            let right_bias = self.graph.variable(right).bias.abs();
            right_bias.total_cmp(&left_bias).then(left.cmp(&right))
        });

        let quota = 1.max((unassigned.len() as f64 * fraction) as usize);

        for &variable in unassigned.iter().take(quota) {
            let value = self.graph.variable(variable).bias > 0.0;
            log::trace!(target: targets::DECIMATION, "Fixed {} to {value}", variable + 1);
            self.graph.assign(variable, value);
            self.counters.decimations += 1;

            for edge in self.graph.variable_enabled_edges(variable).collect::<Vec<_>>() {
                let polarity = self.graph.edge(edge).polarity;
                let clause = self.graph.edge(edge).clause;
                match polarity == value {
                    true => self.graph.disable_clause(clause),
                    false => self.graph.disable_edge(edge),
                }
            }
        }
    }
}
