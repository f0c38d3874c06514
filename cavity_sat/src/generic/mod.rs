//! Generic structures, not tied to the factor graph or any algorithm.

pub mod pcg;
