/*!
Configuration of a checker.

All configuration for a check is contained within a [Config], owned by the checker for the lifetime of the check.
*/

use std::path::PathBuf;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The number of transition steps to unroll for a bounded check.
    ///
    /// Ignored when `interpolation` is set, as the interpolation procedure raises the bound itself.
    pub bound: u32,

    /// Prove the property at every depth via interpolation, rather than up to `bound`.
    pub interpolation: bool,

    /// Print a CSV row of proof and interpolant statistics for each refinement iteration.
    pub statistics: bool,

    /// The plain SAT solver, invoked as `solver <dimacs>`.
    pub solver_path: PathBuf,

    /// The proof-logging SAT solver, invoked as `solver -c <dimacs>`.
    pub proof_solver_path: PathBuf,

    /// A fixed path for DIMACS queries, overwritten on each solver call.
    ///
    /// When unset each query is written to a fresh temporary file, removed after the call.
    pub dimacs_path: Option<PathBuf>,
}

impl Default for Config {
    /// The default configuration expects the minisat binaries on the path, and checks bound zero.
    fn default() -> Self {
        Config {
            bound: 0,
            interpolation: false,
            statistics: false,
            solver_path: PathBuf::from("minisat_core"),
            proof_solver_path: PathBuf::from("minisat_proof"),
            dimacs_path: None,
        }
    }
}
