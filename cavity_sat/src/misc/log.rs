/*!
Miscellaneous items related to [logging](log).

Calls to the log macros are made throughout the library.
Note, no log implementation is provided.
For details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    pub const GRAPH: &str = "graph";
    pub const PROPAGATION: &str = "propagation";
    pub const SURVEYS: &str = "surveys";
    pub const DECIMATION: &str = "decimation";
    pub const WALK: &str = "walk";
}
