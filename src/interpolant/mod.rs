/*!
Craig interpolants from resolution refutations, following McMillan.

Given a refutation of `A ∪ B`, a clause-by-clause labelling of the proof DAG yields a formula `I` with:
- `A ⇒ I`,
- `I ∧ B` unsatisfiable,
- the variables of `I` drawn from the shared vocabulary of `A` and `B`.

The labelling, rooted at the empty clause:
- A root clause of `A` is labelled by the disjunction of its literals over variables of `B` --- false when there are none.
  The disjunction is shifted back one step, so the interpolant lands in the step-0 vocabulary the initial formula uses.
- A root clause of `B` is labelled true.
  Membership is tested against `A` first: a clause in both partitions counts as an `A` root.
- A derived clause combines the labels of its parents: by disjunction when the pivot is local to `A`, by conjunction when the pivot occurs in `B`.

Combination short-circuits on constant labels rather than stacking connectives around them.
This is load-bearing: refutations reuse derivations freely, and without the folding the interpolant grows quadratically in the proof.

The labelling is memoised by proof clause index, which by content-addressing means by clause.
The walk is an explicit work stack; proof DAGs reach millions of clauses.
*/

use crate::{
    encoder::Encoder,
    misc::log::targets,
    proof::{ProofTree, Resolution},
    structures::{variables, ClauseSet, NodeId},
    types::err::{self, ProofError},
};

impl Encoder {
    /// The interpolant of the partitioned clause sets, extracted from a refutation of their union.
    pub fn interpolant(
        &mut self,
        first_clauses: &ClauseSet,
        second_clauses: &ClauseSet,
        proof: &ProofTree,
    ) -> Result<NodeId, err::ErrorKind> {
        let first_variables = variables(first_clauses);
        let second_variables = variables(second_clauses);

        let Some(empty) = proof.empty_clause() else {
            return Err(err::ErrorKind::from(ProofError::MissingEmptyClause));
        };

        let mut labels: Vec<Option<NodeId>> = vec![None; proof.clause_count()];
        let mut stack = vec![empty];

        while let Some(&top) = stack.last() {
            if labels[top].is_some() {
                stack.pop();
                continue;
            }

            let clause = proof.clause(top);

            if first_clauses.contains(clause) {
                let relevant: Vec<i64> = clause
                    .literals()
                    .iter()
                    .copied()
                    .filter(|literal| second_variables.contains(&literal.abs()))
                    .collect();

                let label = match relevant.is_empty() {
                    true => self.false_node(),

                    false => {
                        let nodes: Vec<NodeId> = relevant
                            .iter()
                            .map(|literal| self.formulas.literal(*literal))
                            .collect();
                        let disjunction = self.formulas.disjoin(&nodes);
                        self.shift(disjunction, -1);
                        disjunction
                    }
                };

                labels[top] = Some(label);
                stack.pop();
            } else if second_clauses.contains(clause) {
                let label = self.true_node();
                labels[top] = Some(label);
                stack.pop();
            } else {
                let Some(Resolution { left, pivot, right }) = proof.antecedent(top).copied() else {
                    return Err(err::ErrorKind::from(ProofError::UnexpectedRoot));
                };

                match (labels[left], labels[right]) {
                    (Some(left_label), Some(right_label)) => {
                        let local_pivot = first_variables.contains(&pivot)
                            && !second_variables.contains(&pivot);

                        let combined = match local_pivot {
                            true => self.disjoin_labels(left_label, right_label),
                            false => self.conjoin_labels(left_label, right_label),
                        };

                        labels[top] = Some(combined);
                        stack.pop();
                    }

                    _ => {
                        if labels[left].is_none() {
                            stack.push(left);
                        }
                        if labels[right].is_none() {
                            stack.push(right);
                        }
                    }
                }
            }
        }

        match labels[empty] {
            Some(interpolant) => {
                log::info!(target: targets::INTERPOLANT,
                    "Interpolant of {} nodes from {} proof clauses",
                    self.formulas.count_nodes(interpolant),
                    proof.clause_count()
                );
                Ok(interpolant)
            }
            None => panic!("! No label for the empty clause"),
        }
    }

    // Constant labels fold away rather than stacking connectives.
    fn disjoin_labels(&mut self, left: NodeId, right: NodeId) -> NodeId {
        if self.is_true(left) || self.is_true(right) {
            self.true_node()
        } else if self.is_false(left) {
            right
        } else if self.is_false(right) {
            left
        } else {
            self.formulas.or(left, right)
        }
    }

    fn conjoin_labels(&mut self, left: NodeId, right: NodeId) -> NodeId {
        if self.is_false(left) || self.is_false(right) {
            self.false_node()
        } else if self.is_true(left) {
            right
        } else if self.is_true(right) {
            left
        } else {
            self.formulas.and(left, right)
        }
    }
}
