//! A library for finding satisfying assignments to random 3-SAT formulas by survey inspired decimation.
//!
//! cavity_sat implements the message-passing approach to satisfiability from the statistical physics of the cavity method.
//! Rather than exploring a search tree, the solver runs [survey propagation](crate::procedures::surveys) over the factor graph of a formula until the surveys reach a fixed point, fixes the most biased variables, simplifies, and repeats.
//! When the surveys carry no information the residual formula is handed to a [local search](crate::procedures::walk).
//!
//! The solver is *incomplete*: a satisfying assignment is a certificate, while a failed solve says nothing about unsatisfiability unless the failure followed from forced assignments alone.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built with a [configuration](crate::config) and filled with clauses through the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programatically](crate::context::GenericContext::add_clause).
//!
//! Internally, a formula is a [factor graph](crate::graph): a bipartite graph of variables and clauses, joined by an edge for each literal.
//! Every edge carries a *survey*, a number in [0, 1] read as the probability the clause warns the variable to satisfy it, and an *enabled* flag.
//! Simplification never removes anything from the graph; clauses and edges are disabled instead, and each algorithm works on the enabled view.
//!
//! Useful starting points:
//! - The high-level [solve procedure](crate::procedures::solve) for the decimation loop.
//! - The [factor graph](crate::graph) for the data a solve inspects and mutates.
//! - The [configuration](crate::config) for the knobs which bound a solve.
//!
//! # Example
//!
//! ```rust
//! # use cavity_sat::config::Config;
//! # use cavity_sat::context::Context;
//! # use cavity_sat::reports::Report;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//! p cnf 3 3
//!  1  2  3 0
//! -1  2 -3 0
//!  1 -2  3 0
//! ");
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Report::Satisfiable);
//! assert!(the_context.graph.is_sat());
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log] to help narrow output to a single algorithm.
//! No log implementation is provided; pair the library with something such as [env_logger](https://docs.rs/env_logger/latest/env_logger/).

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod generic;
pub mod graph;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
