/*!
Reads the trace of a proof-logging solver into a [ProofTree].

The trace begins after a `...` sentinel, one statement per line:

```none
N: ROOT ℓ₁ ℓ₂ …
N: CHAIN p₀ [v₀] p₁ [v₁] … pₖ => ℓ₁ ℓ₂ …
```

A `CHAIN` line is a linear chain of resolutions: `p₀` resolved with `p₁` on `v₀`, the result with `p₂` on `v₁`, and so on.
Chains of more than one step are unrolled into binary steps, each intermediate given a fresh line index above the indices of the trace and its computed resolvent stored like any other clause.
The stated conclusion of every chain is checked against the computed resolvent of its last step; a mismatch is fatal, as an interpolant built over a corrupt derivation proves nothing.

Two trace shapes terminate the region:
- `Final clause: <empty>` --- the ordinary shape; the final chain concludes the empty clause.
- `Trivial problem` --- the query was refuted by two complementary unit roots, with no chain emitted.
  One `CHAIN r₁ [v] r₂ => 0` step over those two roots is synthesised in place of the `Final clause: <lit>` line.

A conclusion of `0` collapses to the empty clause.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets,
    proof::{ClauseIdx, ProofTree, Resolution},
    structures::Clause,
    types::err::{self, ProofError},
};

/// Rebuilds the resolution refutation from the output of a proof-logging solver.
pub fn parse_proof(output: &str) -> Result<ProofTree, err::ErrorKind> {
    let Some(position) = output.find("...") else {
        return Err(err::ErrorKind::from(ProofError::MissingTrace));
    };
    let region = &output[position + "...".len()..];

    let mut lines: Vec<String>;

    if let Some(end) = region.find("Final clause: <empty>") {
        lines = trace_lines(&region[..end]);
        match lines.last_mut() {
            // The final chain concludes the empty clause, printed as nothing after `=>`.
            Some(last) => last.push_str(" 0"),
            None => return Err(err::ErrorKind::from(ProofError::MissingTrace)),
        }
    } else if let Some(end) = region.find("Trivial problem") {
        lines = trace_lines(&region[..end]);
        let synthesised = synthesise_trivial_chain(&mut lines)?;
        lines.push(synthesised);
    } else {
        return Err(err::ErrorKind::from(ProofError::MissingTrace));
    }

    let mut tree = ProofTree::new();
    let mut line_clauses: HashMap<usize, ClauseIdx> = HashMap::default();
    let mut running_index = lines.len().saturating_sub(1);

    for (position, line) in lines.iter().enumerate() {
        let Some((number, statement)) = line.split_once(':') else {
            return Err(err::ErrorKind::from(ProofError::Line(position)));
        };
        let number: usize = match number.trim().parse() {
            Ok(number) => number,
            Err(_) => return Err(err::ErrorKind::from(ProofError::Line(position))),
        };

        let index = match statement.split_once("ROOT") {
            Some((_, literals)) => {
                let clause = collapse_zero(clause_of(numbers(literals, position)?));
                tree.register(clause, None)
            }

            None => {
                let Some((_, after_chain)) = statement.split_once("CHAIN") else {
                    return Err(err::ErrorKind::from(ProofError::Line(position)));
                };
                let Some((chain, conclusion)) = after_chain.split_once("=>") else {
                    return Err(err::ErrorKind::from(ProofError::Line(position)));
                };

                let mut path = numbers(&chain.replace(['[', ']'], " "), position)?;
                if path.len() < 3 || path.len() % 2 == 0 {
                    return Err(err::ErrorKind::from(ProofError::Line(position)));
                }

                let stated = collapse_zero(clause_of(numbers(conclusion, position)?));

                // Unroll the chain into binary steps over fresh indices.
                while path.len() > 3 {
                    let left = path_clause(&line_clauses, path[0])?;
                    let pivot = path[1];
                    let right = path_clause(&line_clauses, path[2])?;

                    let resolvent = Clause::resolve(tree.clause(left), tree.clause(right), pivot);
                    running_index += 1;
                    if line_clauses.contains_key(&running_index) {
                        return Err(err::ErrorKind::from(ProofError::IndexCollision(
                            running_index,
                        )));
                    }

                    let index = tree.register(resolvent, Some(Resolution { left, pivot, right }));
                    line_clauses.insert(running_index, index);
                    path.splice(0..3, [running_index as i64]);
                }

                let left = path_clause(&line_clauses, path[0])?;
                let pivot = path[1];
                let right = path_clause(&line_clauses, path[2])?;

                let resolvent = Clause::resolve(tree.clause(left), tree.clause(right), pivot);
                if resolvent != stated {
                    return Err(err::ErrorKind::from(ProofError::ResolventMismatch(number)));
                }

                tree.register(stated, Some(Resolution { left, pivot, right }))
            }
        };

        if line_clauses.insert(number, index).is_some() {
            return Err(err::ErrorKind::from(ProofError::IndexCollision(number)));
        }
    }

    if tree.empty_clause().is_none() {
        return Err(err::ErrorKind::from(ProofError::MissingEmptyClause));
    }

    log::info!(target: targets::PROOF,
        "Parsed refutation: {} clauses, {} steps",
        tree.clause_count(),
        tree.resolution_steps()
    );

    Ok(tree)
}

fn trace_lines(region: &str) -> Vec<String> {
    region
        .trim()
        .lines()
        .map(|line| line.trim().to_string())
        .collect()
}

/// Replaces the `Final clause: <lit>` line of a trivial trace by a chain resolving the two complementary unit roots.
fn synthesise_trivial_chain(lines: &mut Vec<String>) -> Result<String, err::ErrorKind> {
    let Some(final_line) = lines.pop() else {
        return Err(err::ErrorKind::from(ProofError::MissingTrace));
    };
    let variable: i64 = match final_line.split_whitespace().last().map(str::parse::<i64>) {
        Some(Ok(literal)) => literal.abs(),
        _ => return Err(err::ErrorKind::from(ProofError::MissingTrivialRoots)),
    };

    let mut positive_root = None;
    let mut negative_root = None;

    for line in lines.iter() {
        let Some((number, statement)) = line.split_once(':') else {
            continue;
        };
        let Some((_, literals)) = statement.split_once("ROOT") else {
            continue;
        };
        let Ok(number) = number.trim().parse::<usize>() else {
            continue;
        };
        let Ok(literals) = numbers(literals, 0) else {
            continue;
        };

        if literals == [variable] && positive_root.is_none() {
            positive_root = Some(number);
        } else if literals == [-variable] && negative_root.is_none() {
            negative_root = Some(number);
        }
    }

    match (positive_root, negative_root) {
        (Some(positive), Some(negative)) => Ok(format!(
            "{}: CHAIN {positive} [{variable}] {negative} => 0",
            lines.len()
        )),
        _ => Err(err::ErrorKind::from(ProofError::MissingTrivialRoots)),
    }
}

/// The whitespace-separated integers of a field, in order; a field with no integers is malformed.
fn numbers(field: &str, position: usize) -> Result<Vec<i64>, err::ErrorKind> {
    let mut parsed = Vec::default();
    for token in field.split_whitespace() {
        match token.parse() {
            Ok(number) => parsed.push(number),
            Err(_) => return Err(err::ErrorKind::from(ProofError::Line(position))),
        }
    }
    if parsed.is_empty() {
        return Err(err::ErrorKind::from(ProofError::Line(position)));
    }
    Ok(parsed)
}

fn clause_of(literals: Vec<i64>) -> Clause {
    Clause::from_literals(literals)
}

fn collapse_zero(clause: Clause) -> Clause {
    match clause.literals() {
        [0] => Clause::empty(),
        _ => clause,
    }
}

fn path_clause(
    line_clauses: &HashMap<usize, ClauseIdx>,
    reference: i64,
) -> Result<ClauseIdx, err::ErrorKind> {
    let index = usize::try_from(reference)
        .map_err(|_| err::ErrorKind::from(ProofError::UnknownClause(0)))?;
    match line_clauses.get(&index) {
        Some(clause) => Ok(*clause),
        None => Err(err::ErrorKind::from(ProofError::UnknownClause(index))),
    }
}
