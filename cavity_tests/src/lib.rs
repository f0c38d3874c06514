//! Helpers shared by the integration tests: building contexts from DIMACS strings and
//! generating uniform random 3-SAT instances.

use cavity_sat::{config::Config, context::Context};

use rand::Rng;

/// A context over the given formula, ready to solve.
pub fn context_from_dimacs(dimacs: &str, config: Config) -> Context {
    let mut context = Context::from_config(config);
    context
        .read_dimacs(dimacs.as_bytes())
        .expect("a well-formed formula");
    context
}

/// A uniform random 3-SAT instance with `variables` variables and `⌈variables · alpha⌉` clauses,
/// as DIMACS text.
///
/// Each clause mentions three distinct variables, each negated with probability one half.
pub fn uniform_random_3sat(variables: usize, alpha: f64, rng: &mut impl Rng) -> String {
    assert!(variables >= 3);

    let clauses = (variables as f64 * alpha).ceil() as usize;
    let mut dimacs = format!("p cnf {variables} {clauses}\n");

    for _ in 0..clauses {
        let mut chosen: Vec<usize> = Vec::with_capacity(3);
        while chosen.len() < 3 {
            let candidate = rng.random_range(1..=variables);
            if !chosen.contains(&candidate) {
                chosen.push(candidate);
            }
        }

        for variable in chosen {
            match rng.random_bool(0.5) {
                true => dimacs.push_str(&format!("{variable} ")),
                false => dimacs.push_str(&format!("-{variable} ")),
            }
        }
        dimacs.push_str("0\n");
    }

    dimacs
}
