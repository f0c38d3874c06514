use cavity_sat::{config::Config, generic::pcg::Pcg32, reports::Report};

use cavity_tests::{context_from_dimacs, uniform_random_3sat};

use rand::SeedableRng;

/// A reported assignment always checks out against the original formula, whatever was
/// disabled along the way.
#[test]
fn satisfiable_reports_carry_satisfying_assignments() {
    for seed in 0u64..5 {
        let mut generator = Pcg32::from_seed(seed.to_le_bytes());
        let dimacs = uniform_random_3sat(50, 4.0, &mut generator);

        let config = Config {
            seed,
            ..Config::default()
        };
        let mut the_context = context_from_dimacs(&dimacs, config);

        if the_context.solve() == Report::Satisfiable {
            assert!(the_context.graph.is_sat());
        }
    }
}

#[test]
fn easy_density_mostly_solves() {
    let mut solved = 0;

    for seed in 0..5_u64 {
        let mut generator = Pcg32::from_seed(seed.to_le_bytes());
        let dimacs = uniform_random_3sat(50, 4.0, &mut generator);

        let config = Config {
            seed,
            ..Config::default()
        };
        let mut the_context = context_from_dimacs(&dimacs, config);

        if the_context.solve() == Report::Satisfiable {
            assert!(the_context.graph.is_sat());
            solved += 1;
        }
    }

    assert!(solved >= 3, "solved {solved} of 5");
}

#[test]
fn fixed_seeds_replay_a_solve() {
    let mut generator = Pcg32::from_seed(77_u64.to_le_bytes());
    let dimacs = uniform_random_3sat(40, 4.0, &mut generator);

    let config = Config {
        seed: 7,
        ..Config::default()
    };

    let mut left = context_from_dimacs(&dimacs, config.clone());
    let mut right = context_from_dimacs(&dimacs, config);

    assert_eq!(left.solve(), right.solve());
    assert_eq!(left.graph.valuation_string(), right.graph.valuation_string());
    assert_eq!(
        left.counters.total_sp_iterations,
        right.counters.total_sp_iterations
    );
    assert_eq!(left.counters.decimations, right.counters.decimations);
    assert_eq!(left.counters.walk_flips, right.counters.walk_flips);
    assert_eq!(left.graph, right.graph);
}

#[test]
#[ignore = "expensive"]
fn near_the_phase_transition_a_majority_solves() {
    let mut solved = 0;
    let mut sat_sp_iterations = 0;

    for seed in 0..10_u64 {
        let mut generator = Pcg32::from_seed(seed.to_le_bytes());
        let dimacs = uniform_random_3sat(100, 4.2, &mut generator);

        let config = Config {
            seed,
            ..Config::default()
        };
        let mut the_context = context_from_dimacs(&dimacs, config);

        if the_context.solve() == Report::Satisfiable {
            assert!(the_context.graph.is_sat());
            solved += 1;
            sat_sp_iterations += the_context.counters.total_sp_iterations;
        }
    }

    assert!(solved >= 6, "solved {solved} of 10");
    assert!(sat_sp_iterations > 0);
}
