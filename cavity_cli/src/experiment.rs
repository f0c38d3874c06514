use std::path::PathBuf;

use cavity_sat::{
    config::Config,
    context::Context,
    reports::Report,
    types::err::{ErrorKind, ParseError},
};

use crate::misc;

/// The decimation fractions to try, from coarse to fine.
///
/// A smaller fraction solves more instances at the cost of more survey runs, so the ladder
/// stops at the first fraction which solves every instance.
const FRACTION_LADDER: [f64; 6] = [0.04, 0.02, 0.01, 0.005, 0.0025, 0.00125];

pub struct ExperimentSettings {
    pub variables: usize,
    pub alpha: f64,
    pub generator: String,
    pub instances: usize,
    pub seed: u64,
}

fn instance_path(settings: &ExperimentSettings, index: usize) -> PathBuf {
    PathBuf::from(format!(
        "experiments/instances/{}_3SAT_{}N_{}R_{}.cnf",
        settings.generator, settings.variables, settings.alpha, index
    ))
}

/// Runs the fraction ladder over the configured instances.
///
/// Returns the process exit code: zero on completion, nonzero when an instance file is missing
/// or unreadable.
pub fn run(settings: &ExperimentSettings) -> i32 {
    println!("===========================================================");
    println!("==                RUNNING BASE EXPERIMENT                ==");
    println!("===========================================================");
    println!();
    println!("Experiment parameters:");
    println!(" - N (variables) = {}", settings.variables);
    println!(" - α (clauses/variables ratio) = {}", settings.alpha);
    println!(" - 3-SAT CNF generator = {}", settings.generator);

    let mut experiment_id = 1;
    let mut solve_id = 0;

    for fraction in FRACTION_LADDER {
        println!();
        println!("------------------------------");
        println!("Experiment {experiment_id}:");
        println!(" - N: {}", settings.variables);
        println!(" - α: {}", settings.alpha);
        println!(" - f: {fraction}");
        println!("------------------------------");

        let mut sat_instances = 0;
        let mut sat_sp_iterations = 0;

        for index in 1..=settings.instances {
            let path = instance_path(settings, index);

            // Each solve gets its own generator, offset from the base seed so a rerun of the
            // experiment replays every solve.
            let config = Config {
                seed: settings.seed.wrapping_add(solve_id),
                fraction,
                ..Config::default()
            };
            solve_id += 1;

            let mut context = Context::from_config(config);
            match misc::load_dimacs(&mut context, &path) {
                Ok(_) => println!("Solving file {}", path.display()),
                Err(ErrorKind::Parse(ParseError::NoFile)) => {
                    eprintln!("ERROR: Can't open file {}", path.display());
                    return 1;
                }
                Err(e) => {
                    eprintln!("ERROR: Can't parse file {}: {e:?}", path.display());
                    return 1;
                }
            }

            match context.solve() {
                Report::Satisfiable => {
                    sat_instances += 1;
                    sat_sp_iterations += context.counters.total_sp_iterations;
                    println!("Solved: SAT");
                }
                _ => println!("Solved: UNSAT"),
            }
            println!("Elapsed time = {}s", context.counters.time.as_secs());
            println!();
        }

        let sat_percent = sat_instances as f64 * 100.0 / settings.instances as f64;
        println!();
        println!("Results:");
        println!(" SAT instances: {sat_instances} ({sat_percent}%)");
        println!(" Total SP it. in SAT instances: {sat_sp_iterations}");

        experiment_id += 1;

        // All instances solved: a finer fraction has nothing left to show.
        if sat_instances == settings.instances {
            break;
        }
    }

    0
}
