/*!
Delegation of queries to external SAT solvers.

Two solver profiles are used:
- [Plain](Profile::Plain): invoked as `solver <dimacs>`, read for a verdict only.
- [ProofLogging](Profile::ProofLogging): invoked as `solver -c <dimacs>`; on an unsatisfiable query the output additionally carries a resolution trace, kept for the [proof](crate::proof) parser.

The driver writes the clause set in DIMACS form, blocks on the child process, and scans its standard output for the verdict.
`UNSATISFIABLE` is looked for before `SATISFIABLE`, as the former contains the latter.

The query is written to the configured fixed path when one is set, overwritten on each call; otherwise to a fresh temporary file which is removed once the solver returns.
*/

use std::process::Command;

use crate::{
    config::Config,
    encoder::Encoder,
    misc::log::targets,
    structures::ClauseSet,
    types::err::{self, SolverError},
};

/// The two ways a solver is invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    /// Verdict only.
    Plain,

    /// Verdict, with a resolution trace on unsatisfiable queries.
    ProofLogging,
}

/// The verdict of a query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Satisfiable,
    Unsatisfiable,
}

/// A verdict together with the output it was read from.
pub struct SolverOutput {
    pub verdict: Verdict,

    /// The full standard output of the solver; holds the proof trace of an unsatisfiable proof-logging query.
    pub stdout: String,
}

/// Writes the clause set and blocks on the solver of the given profile.
pub fn solve(
    config: &Config,
    encoder: &Encoder,
    clauses: &ClauseSet,
    profile: Profile,
) -> Result<SolverOutput, err::ErrorKind> {
    let solver_path = match profile {
        Profile::Plain => &config.solver_path,
        Profile::ProofLogging => &config.proof_solver_path,
    };

    let mut command = Command::new(solver_path);
    if let Profile::ProofLogging = profile {
        command.arg("-c");
    }

    let mut dimacs = Vec::new();
    encoder
        .write_dimacs(clauses, &mut dimacs)
        .map_err(|_| err::ErrorKind::from(SolverError::Dimacs))?;

    // Keeps a temporary file alive until the solver has read it.
    let mut scratch: Option<tempfile::NamedTempFile> = None;

    match &config.dimacs_path {
        Some(path) => {
            std::fs::write(path, &dimacs).map_err(|_| err::ErrorKind::from(SolverError::Dimacs))?;
            command.arg(path);
        }

        None => {
            use std::io::Write;
            let mut file = tempfile::NamedTempFile::new()
                .map_err(|_| err::ErrorKind::from(SolverError::Dimacs))?;
            file.write_all(&dimacs)
                .map_err(|_| err::ErrorKind::from(SolverError::Dimacs))?;
            command.arg(file.path());
            scratch = Some(file);
        }
    }

    log::info!(target: targets::SOLVER,
        "{:?} query: {} clauses to {}",
        profile,
        clauses.len(),
        solver_path.display()
    );

    let output = command.output().map_err(|_| {
        err::ErrorKind::from(SolverError::Launch(solver_path.display().to_string()))
    })?;
    drop(scratch);

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

    let verdict = if stdout.contains("UNSATISFIABLE") {
        Verdict::Unsatisfiable
    } else if stdout.contains("SATISFIABLE") {
        Verdict::Satisfiable
    } else {
        return Err(err::ErrorKind::from(SolverError::NoVerdict));
    };

    log::info!(target: targets::SOLVER, "Verdict: {verdict:?}");

    Ok(SolverOutput { verdict, stdout })
}
