/*!
Unbounded safety by interpolation, following McMillan.

The outer loop deepens the bound, starting from 1.
At each bound, a plain bounded check runs first; a counterexample there is a real counterexample, and the check reports [Unsafe](Report::Unsafe).

Otherwise the unrolled formula is split around the first step:

- `A` --- gate definitions over steps 0..1, the initial formula, and the step-0-to-1 transition.
- `B` --- gate definitions over steps 2.., the bad output at the final step, and the remaining transitions.

With `A ∧ B` unsatisfiable, the [interpolant](crate::interpolant) `I` of the refutation over-approximates the states reachable in one step from the initial states, expressed in the step-0 vocabulary.
The inner loop then asks whether `I` adds states beyond the current approximation, by a plain query on `I ⊕ I_previous`:

- unsatisfiable --- the approximation is closed under the transition relation and excludes the bad states at every depth: [Safe](Report::Safe);
- satisfiable --- fold `I` into the initial formula and refine again.

Should the partitioned query itself be satisfiable the approximation has grown too coarse for this window --- states admitted by an interpolant, though not truly reachable, reach the bad output --- and the bound is deepened.

Interpolants from distinct refinement rounds need not be syntactically related, as the solver is free to refute each query differently; only the explicit equivalence query decides convergence.
*/

use crate::{
    config::Config,
    encoder::Encoder,
    misc::log::targets,
    procedures::bmc,
    proof,
    reports::Report,
    solver::{self, Profile, Verdict},
    types::err,
};

/// Checks the circuit at every depth, deepening the bound until a verdict is reached.
pub fn check(aiger: &str, config: &Config) -> Result<Report, err::ErrorKind> {
    if config.statistics {
        println!("bound,proof_tree_size,proof_tree_steps,interpolant_size,interpolants_equal_size");
    }

    let mut bound: u32 = 1;

    'deepening: loop {
        if bmc::check(aiger, bound, config)? == Report::Unsafe {
            return Ok(Report::Unsafe);
        }

        let mut encoder = Encoder::from_aiger(aiger, bound)?;
        let end = encoder.bound();

        let mut initial = encoder.initial();
        let first_equivalences = encoder.equivalences(0, 1);
        let second_equivalences = encoder.equivalences(2, end);
        let first_transition = encoder.transition(0, 0);
        let second_transition = encoder.transition(1, end - 1);
        let safety = encoder.safety(end, end);

        let mut current_interpolant = encoder.false_node();

        'refinement: loop {
            let first_formula =
                encoder
                    .formulas
                    .conjoin(&[first_equivalences, initial, first_transition]);
            let first_clauses = encoder.generate_clauses(first_formula);

            let second_formula =
                encoder
                    .formulas
                    .conjoin(&[second_equivalences, safety, second_transition]);
            let second_clauses = encoder.generate_clauses(second_formula);

            let mut union = first_clauses.clone();
            union.extend(second_clauses.iter().cloned());

            let partitioned = solver::solve(config, &encoder, &union, Profile::ProofLogging)?;

            match partitioned.verdict {
                Verdict::Satisfiable => {
                    // Overapproximation admits a spurious path in this window.
                    log::info!(target: targets::PROCEDURES, "Deepening beyond bound {bound}");
                    break 'refinement;
                }

                Verdict::Unsatisfiable => {
                    let proof = proof::parse_proof(&partitioned.stdout)?;
                    let next_interpolant =
                        encoder.interpolant(&first_clauses, &second_clauses, &proof)?;

                    log::trace!(target: targets::PROCEDURES,
                        "Interpolant: {}",
                        encoder.formulas.render(next_interpolant)
                    );

                    let changed = encoder
                        .formulas
                        .not_equal(current_interpolant, next_interpolant);

                    if config.statistics {
                        println!(
                            "{},{},{},{},{}",
                            bound,
                            proof.clause_count(),
                            proof.resolution_steps(),
                            encoder.formulas.count_nodes(next_interpolant),
                            encoder.formulas.count_nodes(changed)
                        );
                    }

                    let changed_clauses = encoder.generate_clauses(changed);
                    let convergence =
                        solver::solve(config, &encoder, &changed_clauses, Profile::Plain)?;

                    match convergence.verdict {
                        Verdict::Unsatisfiable => {
                            // Nothing beyond the current approximation: a fixed point.
                            return Ok(Report::Safe);
                        }

                        Verdict::Satisfiable => {
                            initial = encoder.formulas.or(initial, next_interpolant);
                            current_interpolant = next_interpolant;
                        }
                    }
                }
            }
        }

        bound += 1;
    }
}
