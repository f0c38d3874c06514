//! Tools for building the factor graph of a context.

use crate::{
    context::{ContextState, GenericContext},
    structures::{clause::ClauseId, variable::VariableId},
    types::err::{self, BuildError},
};

pub mod dimacs;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Ensures variables `1..=count` (in the 1-based external numbering) are part of the graph.
    pub fn ensure_variables(&mut self, count: usize) {
        while self.graph.variable_count() < count {
            self.graph.fresh_variable();
        }
    }

    /// Adds a clause given as signed, 1-based integers, DIMACS style.
    ///
    /// Variables are created as needed, and repeats of a literal within the clause are dropped.
    ///
    /// ```rust
    /// # use cavity_sat::config::Config;
    /// # use cavity_sat::context::Context;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// assert!(the_context.add_clause(&[1, -2, 3]).is_ok());
    /// assert_eq!(the_context.graph.clause_count(), 1);
    /// ```
    pub fn add_clause(&mut self, literals: &[i32]) -> Result<ClauseId, err::BuildError> {
        if literals.is_empty() {
            return Err(BuildError::EmptyClause);
        }
        if literals.contains(&0) {
            return Err(BuildError::ZeroLiteral);
        }

        let mut pairs = literals
            .iter()
            .map(|&literal| {
                let variable = (literal.unsigned_abs() - 1) as VariableId;
                (variable, literal > 0)
            })
            .collect::<Vec<_>>();
        pairs.sort_unstable();
        pairs.dedup();

        if let Some(&(highest, _)) = pairs.last() {
            self.ensure_variables(highest as usize + 1);
        }

        self.state = ContextState::Input;
        Ok(self.graph.add_clause(&pairs))
    }
}
