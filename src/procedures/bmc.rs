/*!
Bounded model checking.

The circuit is unrolled to the bound, flattened to CNF, and handed to the plain solver.
The formula is satisfiable exactly when some trace of at most `bound` steps from the all-zero valuation asserts the bad output, so:
- unsatisfiable reports [Safe](Report::Safe) --- the property holds within the bound;
- satisfiable reports [Unsafe](Report::Unsafe) --- a counterexample exists.
*/

use crate::{
    config::Config,
    encoder::Encoder,
    misc::log::targets,
    reports::Report,
    solver::{self, Profile, Verdict},
    types::err,
};

/// Checks the circuit up to the given bound.
pub fn check(aiger: &str, bound: u32, config: &Config) -> Result<Report, err::ErrorKind> {
    let mut encoder = Encoder::from_aiger(aiger, bound)?;

    let formula = encoder.bounded_model_checking_formula();
    let clauses = encoder.generate_clauses(formula);

    let output = solver::solve(config, &encoder, &clauses, Profile::Plain)?;

    let report = match output.verdict {
        Verdict::Unsatisfiable => Report::Safe,
        Verdict::Satisfiable => Report::Unsafe,
    };

    log::info!(target: targets::PROCEDURES, "Bound {bound}: {report:?}");

    Ok(report)
}
