use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

pub fn cli() -> Command {
    Command::new("cavity_cli")
        .about("Solves random 3-SAT instances by survey inspired decimation")

        .arg(Arg::new("variables")
            .required_unless_present("file")
            .value_parser(value_parser!(usize))
            .help("The number of variables (N) of the instances to solve."))

        .arg(Arg::new("alpha")
            .required_unless_present("file")
            .value_parser(value_parser!(f64))
            .help("The clauses-to-variables ratio (α) of the instances to solve."))

        .arg(Arg::new("generator")
            .required(false)
            .value_parser(["random", "community"])
            .default_value("random")
            .help("Which generator produced the instances."))

        .arg(Arg::new("instances")
            .short('i')
            .long("instances")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .default_value("10")
            .help("The number of instances to solve at each decimation fraction."))

        .arg(Arg::new("seed")
            .short('s')
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .default_value("1234")
            .help("The base seed for the solver's random number generator."))

        .arg(Arg::new("file")
            .short('f')
            .long("file")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("Solve a single DIMACS CNF file instead of running an experiment."))
}
