use cavity_sat::{config::Config, procedures::walk::WalkOutcome};

use cavity_tests::context_from_dimacs;

#[test]
fn break_counts_leave_no_trace() {
    let dimacs = "p cnf 3 3
1 2 3 0
-1 -2 3 0
1 -2 -3 0
";
    let mut the_context = context_from_dimacs(dimacs, Config::default());

    for variable in 0..3 {
        the_context.graph.assign(variable, true);
    }

    let satisfied = the_context
        .graph
        .enabled_clauses()
        .into_iter()
        .filter(|&clause| the_context.graph.clause_is_sat(clause))
        .collect::<Vec<_>>();

    let before = the_context.graph.clone();
    for variable in 0..3 {
        the_context.graph.break_count(variable, &satisfied);
    }
    assert_eq!(the_context.graph, before);
}

#[test]
fn break_counts_count_broken_clauses() {
    // With everything true, flipping 3 breaks the first two clauses and satisfies the third.
    let dimacs = "p cnf 3 3
1 2 3 0
-1 -2 3 0
1 -2 -3 0
";
    let mut the_context = context_from_dimacs(dimacs, Config::default());

    for variable in 0..3 {
        the_context.graph.assign(variable, true);
    }

    let satisfied = the_context
        .graph
        .enabled_clauses()
        .into_iter()
        .filter(|&clause| the_context.graph.clause_is_sat(clause))
        .collect::<Vec<_>>();

    assert_eq!(the_context.graph.break_count(2, &satisfied), 1);
    assert_eq!(the_context.graph.break_count(0, &satisfied), 1);
}

#[test]
fn search_satisfies_an_easy_formula() {
    let dimacs = "p cnf 4 4
1 2 3 0
-1 2 4 0
1 -3 -4 0
-2 3 -4 0
";
    let mut the_context = context_from_dimacs(dimacs, Config::default());

    assert_eq!(the_context.walksat(), WalkOutcome::Satisfied);
    assert!(the_context.graph.is_sat());
}

#[test]
fn search_never_mutates_the_enabled_view() {
    let dimacs = "p cnf 3 3
1 2 3 0
1 -2 -3 0
-1 2 -3 0
";
    let mut the_context = context_from_dimacs(dimacs, Config::default());
    the_context.graph.disable_clause(2);

    let enabled_clauses = the_context.graph.enabled_clauses();
    let enabled_edges = the_context.graph.enabled_edges();

    the_context.walksat();

    assert_eq!(the_context.graph.enabled_clauses(), enabled_clauses);
    assert_eq!(the_context.graph.enabled_edges(), enabled_edges);
    assert!(!the_context.graph.clause(2).enabled);
}
