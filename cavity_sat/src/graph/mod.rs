//! The factor graph of a formula, accessed and mutated through a [FactorGraph] struct.
//!
//! The graph owns three flat arenas --- variables, clauses, and edges --- and entities refer to each other by index.
//! All iteration orders follow construction order, so a fixed input and a fixed seed reproduce a solve exactly.
//!
//! Simplification is expressed by disabling: a satisfied clause or a falsified edge keeps its slot in the arena and is skipped by the enabled views.
//! Within one solve disabling is monotonic.
//! As nothing is removed, [is_sat](FactorGraph::is_sat) can always check the current assignment against the *original* formula.

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{Clause, ClauseId},
        edge::{Edge, EdgeId},
        variable::{Variable, VariableId},
    },
};

/// The factor graph: variables on one side, clauses on the other, an edge for each literal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FactorGraph {
    variables: Vec<Variable>,
    clauses: Vec<Clause>,
    edges: Vec<Edge>,
}

impl FactorGraph {
    /// A count of all variables, assigned or not.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// A count of all clauses, enabled or not.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// A count of all edges, enabled or not.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id as usize]
    }

    pub fn variable_mut(&mut self, id: VariableId) -> &mut Variable {
        &mut self.variables[id as usize]
    }

    pub fn clause(&self, id: ClauseId) -> &Clause {
        &self.clauses[id as usize]
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id as usize]
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id as usize]
    }

    /// A fresh variable with no incident edges.
    pub fn fresh_variable(&mut self) -> VariableId {
        let id = self.variables.len() as VariableId;
        self.variables.push(Variable::fresh());
        id
    }

    /// Adds a clause over the given (variable, polarity) pairs, creating an edge for each literal.
    ///
    /// Each variable must already be part of the graph.
    pub fn add_clause(&mut self, literals: &[(VariableId, bool)]) -> ClauseId {
        let clause_id = self.clauses.len() as ClauseId;
        let mut clause = Clause::fresh();

        for &(variable, polarity) in literals {
            let edge_id = self.edges.len() as EdgeId;
            self.edges.push(Edge::fresh(variable, clause_id, polarity));
            self.variables[variable as usize].edges.push(edge_id);
            clause.edges.push(edge_id);
        }

        self.clauses.push(clause);
        clause_id
    }

    // Enabled views.
    // Each is a filtered traversal of the relevant arena, so the order is construction order.

    /// Every enabled edge of the graph.
    pub fn enabled_edges(&self) -> Vec<EdgeId> {
        (0..self.edges.len() as EdgeId)
            .filter(|&id| self.edges[id as usize].enabled)
            .collect()
    }

    /// Every enabled clause of the graph.
    pub fn enabled_clauses(&self) -> Vec<ClauseId> {
        (0..self.clauses.len() as ClauseId)
            .filter(|&id| self.clauses[id as usize].enabled)
            .collect()
    }

    /// Every variable without a value.
    pub fn unassigned_variables(&self) -> Vec<VariableId> {
        (0..self.variables.len() as VariableId)
            .filter(|&id| !self.variables[id as usize].assigned)
            .collect()
    }

    /// The enabled edges incident to a clause.
    pub fn clause_enabled_edges(&self, clause: ClauseId) -> impl Iterator<Item = EdgeId> + '_ {
        self.clauses[clause as usize]
            .edges
            .iter()
            .copied()
            .filter(move |&edge| self.edges[edge as usize].enabled)
    }

    /// The enabled edges incident to a variable.
    pub fn variable_enabled_edges(&self, variable: VariableId) -> impl Iterator<Item = EdgeId> + '_ {
        self.variables[variable as usize]
            .edges
            .iter()
            .copied()
            .filter(move |&edge| self.edges[edge as usize].enabled)
    }

    pub fn clause_enabled_edge_count(&self, clause: ClauseId) -> usize {
        self.clause_enabled_edges(clause).count()
    }

    // Mutation.

    /// Gives the variable a value.
    ///
    /// Sound to call on an assigned variable, e.g. to flip it during local search.
    pub fn assign(&mut self, variable: VariableId, value: bool) {
        let variable = &mut self.variables[variable as usize];
        variable.assigned = true;
        variable.value = value;
    }

    pub fn disable_clause(&mut self, clause: ClauseId) {
        self.clauses[clause as usize].enabled = false;
    }

    pub fn disable_edge(&mut self, edge: EdgeId) {
        self.edges[edge as usize].enabled = false;
    }

    // Satisfaction.

    /// Whether some *enabled* edge of the clause is satisfied by the current assignment.
    pub fn clause_is_sat(&self, clause: ClauseId) -> bool {
        self.clause_enabled_edges(clause).any(|edge| {
            let edge = &self.edges[edge as usize];
            let variable = &self.variables[edge.variable as usize];
            variable.assigned && variable.value == edge.polarity
        })
    }

    /// Whether the current assignment satisfies the original formula.
    ///
    /// Every clause counts, enabled or not: a clause disabled as satisfied may have lost its satisfying
    /// variable to a later flip, so disabled clauses are re-checked rather than trusted.
    pub fn is_sat(&self) -> bool {
        let sat = self.clauses.iter().all(|clause| {
            clause.edges.iter().any(|&edge| {
                let edge = &self.edges[edge as usize];
                let variable = &self.variables[edge.variable as usize];
                variable.assigned && variable.value == edge.polarity
            })
        });
        log::trace!(target: targets::GRAPH, "SAT check: {sat}");
        sat
    }

    /// The current assignment as space-separated signed (1-based) variables, DIMACS style.
    pub fn valuation_string(&self) -> String {
        self.variables
            .iter()
            .enumerate()
            .filter(|(_, variable)| variable.assigned)
            .map(|(index, variable)| match variable.value {
                true => format!("{}", index + 1),
                false => format!("-{}", index + 1),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for FactorGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} variables ({} unassigned), {} clauses ({} enabled), {} edges ({} enabled)",
            self.variable_count(),
            self.unassigned_variables().len(),
            self.clause_count(),
            self.enabled_clauses().len(),
            self.edge_count(),
            self.enabled_edges().len(),
        )
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    fn two_clause_graph() -> FactorGraph {
        let mut graph = FactorGraph::default();
        for _ in 0..3 {
            graph.fresh_variable();
        }
        graph.add_clause(&[(0, true), (1, false), (2, true)]);
        graph.add_clause(&[(0, false), (1, true), (2, true)]);
        graph
    }

    #[test]
    fn views_follow_construction_order() {
        let graph = two_clause_graph();

        assert_eq!(graph.enabled_edges(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(graph.enabled_clauses(), vec![0, 1]);
        assert_eq!(graph.unassigned_variables(), vec![0, 1, 2]);
        assert_eq!(graph.clause_enabled_edges(1).collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(graph.variable_enabled_edges(0).collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn disabling_narrows_views() {
        let mut graph = two_clause_graph();

        graph.disable_edge(0);
        graph.disable_clause(1);

        assert_eq!(graph.enabled_clauses(), vec![0]);
        assert_eq!(graph.clause_enabled_edges(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(graph.variable_enabled_edges(0).collect::<Vec<_>>(), vec![3]);
        assert_eq!(graph.clause_enabled_edge_count(0), 2);
    }

    #[test]
    fn satisfaction_checks_the_original_formula() {
        let mut graph = two_clause_graph();

        graph.assign(2, true);
        assert!(graph.clause_is_sat(0));
        assert!(graph.is_sat());

        // A disabled clause still counts against the full check.
        graph.assign(2, false);
        graph.disable_clause(0);
        assert!(!graph.is_sat());
    }

    #[test]
    fn valuation_renders_one_based() {
        let mut graph = two_clause_graph();
        graph.assign(0, true);
        graph.assign(2, false);

        assert_eq!(graph.valuation_string(), "1 -3");
    }
}
