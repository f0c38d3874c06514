use cavity_sat::{config::Config, reports::Report};

use cavity_tests::context_from_dimacs;

#[test]
fn trivial_single_clause() {
    let mut the_context = context_from_dimacs("p cnf 1 1\n1 0\n", Config::default());

    assert_eq!(the_context.solve(), Report::Satisfiable);
    assert!(the_context.graph.variable(0).assigned);
    assert!(the_context.graph.variable(0).value);

    // Forced assignments settle this before any survey is drawn.
    assert_eq!(the_context.counters.sp_runs, 0);
}

#[test]
fn trivial_contradiction_refutes() {
    let mut the_context = context_from_dimacs("p cnf 1 2\n1 0\n-1 0\n", Config::default());

    assert_eq!(the_context.solve(), Report::Unsatisfiable);
}

#[test]
fn small_satisfiable_three_sat() {
    let dimacs = "p cnf 3 3
1 2 3 0
-1 2 -3 0
1 -2 3 0
";
    let mut the_context = context_from_dimacs(dimacs, Config::default());

    assert_eq!(the_context.solve(), Report::Satisfiable);
    assert!(the_context.graph.is_sat());
}

#[test]
fn forced_chain_propagates_through() {
    let dimacs = "p cnf 3 3
1 0
-1 2 0
-2 3 0
";
    let mut the_context = context_from_dimacs(dimacs, Config::default());

    assert_eq!(the_context.solve(), Report::Satisfiable);
    for variable in 0..3 {
        assert!(the_context.graph.variable(variable).assigned);
        assert!(the_context.graph.variable(variable).value);
    }
    assert_eq!(the_context.counters.sp_runs, 0);
}

#[test]
fn solved_contexts_are_not_resumed() {
    let mut the_context = context_from_dimacs("p cnf 1 1\n1 0\n", Config::default());

    assert_eq!(the_context.solve(), Report::Satisfiable);
    let counters_after_first = the_context.counters.clone();

    assert_eq!(the_context.solve(), Report::Satisfiable);
    assert_eq!(
        the_context.counters.total_sp_iterations,
        counters_after_first.total_sp_iterations
    );
}
