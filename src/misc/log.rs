/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing circuits](crate::builder)
    pub const AIGER: &str = "aiger";

    /// Logs related to [unrolling and CNF generation](crate::encoder)
    pub const ENCODER: &str = "encoder";

    /// Logs related to [external solver calls](crate::solver)
    pub const SOLVER: &str = "solver";

    /// Logs related to [proof traces](crate::proof)
    pub const PROOF: &str = "proof";

    /// Logs related to [interpolants](crate::interpolant)
    pub const INTERPOLANT: &str = "interpolant";

    /// Logs related to the [top-level procedures](crate::procedures)
    pub const PROCEDURES: &str = "procedures";
}
