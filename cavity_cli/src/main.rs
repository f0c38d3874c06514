use std::path::PathBuf;

use cavity_sat::{
    config::Config,
    context::Context,
    reports::Report,
    types::err::{BuildError, ErrorKind, ParseError},
};

mod cli;
mod experiment;
mod misc;

use experiment::ExperimentSettings;

fn main() {
    env_logger::init();

    let matches = cli::cli().get_matches();

    if let Some(path) = matches.get_one::<PathBuf>("file") {
        std::process::exit(solve_file(path, *matches.get_one::<u64>("seed").expect("defaulted")));
    }

    let settings = ExperimentSettings {
        variables: *matches.get_one::<usize>("variables").expect("required"),
        alpha: *matches.get_one::<f64>("alpha").expect("required"),
        generator: matches.get_one::<String>("generator").expect("defaulted").clone(),
        instances: *matches.get_one::<usize>("instances").expect("defaulted"),
        seed: *matches.get_one::<u64>("seed").expect("defaulted"),
    };

    std::process::exit(experiment::run(&settings));
}

/// Solves one DIMACS file, reporting in the solution-line style with the matching exit code.
fn solve_file(path: &PathBuf, seed: u64) -> i32 {
    let config = Config {
        seed,
        ..Config::default()
    };
    let mut context = Context::from_config(config);

    match misc::load_dimacs(&mut context, path) {
        Ok(_) => {}
        Err(ErrorKind::Parse(ParseError::NoFile)) => {
            eprintln!("ERROR: Can't open file {}", path.display());
            return 1;
        }
        // A clause with no literals refutes the formula during parsing.
        Err(ErrorKind::Build(BuildError::EmptyClause)) => {
            println!("s UNSATISFIABLE");
            return 20;
        }
        Err(e) => {
            eprintln!("c Error loading DIMACS: {e:?}");
            return 1;
        }
    }

    match context.solve() {
        Report::Satisfiable => {
            println!("s SATISFIABLE");
            println!("v {}", context.graph.valuation_string());
            10
        }
        Report::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            20
        }
        Report::Unknown => {
            println!("s UNKNOWN");
            30
        }
    }
}
