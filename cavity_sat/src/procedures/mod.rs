//! The procedures of a solve, each a collection of methods on a context.
//!
//! - [surveys] --- the fixed-point iteration which writes a survey on every enabled edge.
//! - [bias] --- distils the surveys around a variable into a signed preference.
//! - [propagation] --- unit propagation over the enabled view of the graph.
//! - [walk] --- break-count local search for when the surveys carry no information.
//! - [solve] --- the decimation loop which drives the rest.

pub mod bias;
pub mod propagation;
pub mod solve;
pub mod surveys;
pub mod walk;
