/*!
Resolution refutations, rebuilt from the traces a proof-logging solver emits.

A [ProofTree] is a content-addressed store of clauses: two clauses with the same literals are the same node, whatever lines of the trace produced them.
Each clause is either a *root* --- an input clause of the query --- or *derived*, carrying a [Resolution]: two parent clauses and the pivot variable resolved upon.
The refutation is rooted at the empty clause.

The store is append-only and first-registration-wins: a clause derived twice keeps its first derivation, and a clause seen first as a root stays a root.

Traces are read by [parse::parse_proof], which also unrolls the solver's chain resolutions into the binary steps stored here.
*/

pub mod parse;
pub use parse::parse_proof;

use std::collections::HashMap;

use crate::structures::Clause;

/// An index into the clause store of a [ProofTree].
pub type ClauseIdx = usize;

/// A binary resolution step: the resolvent of `left` and `right` on `pivot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub left: ClauseIdx,

    /// The variable resolved upon, always positive.
    pub pivot: i64,

    pub right: ClauseIdx,
}

/// A content-addressed resolution DAG.
#[derive(Default)]
pub struct ProofTree {
    clauses: Vec<Clause>,
    ids: HashMap<Clause, ClauseIdx>,
    antecedents: Vec<Option<Resolution>>,
}

impl ProofTree {
    pub fn new() -> Self {
        ProofTree::default()
    }

    /// The number of distinct clauses in the tree.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The clause at the given index.
    pub fn clause(&self, index: ClauseIdx) -> &Clause {
        &self.clauses[index]
    }

    /// The derivation of the clause, or none for a root.
    pub fn antecedent(&self, index: ClauseIdx) -> Option<&Resolution> {
        self.antecedents[index].as_ref()
    }

    /// The index of a clause with the given content, if present.
    pub fn index_of(&self, clause: &Clause) -> Option<ClauseIdx> {
        self.ids.get(clause).copied()
    }

    /// The index of the empty clause, if the tree derives it.
    pub fn empty_clause(&self) -> Option<ClauseIdx> {
        self.index_of(&Clause::empty())
    }

    /// Interns a clause, recording its derivation only if the clause is fresh.
    ///
    /// Re-registration returns the existing index and discards the offered derivation, whether the existing clause is a root or derived.
    pub fn register(&mut self, clause: Clause, antecedent: Option<Resolution>) -> ClauseIdx {
        match self.ids.get(&clause) {
            Some(index) => *index,

            None => {
                let index = self.clauses.len();
                self.ids.insert(clause.clone(), index);
                self.clauses.push(clause);
                self.antecedents.push(antecedent);
                index
            }
        }
    }

    /// The number of resolution steps in the refutation, counted as the size of the tree unrolled from the empty clause.
    ///
    /// Shared derivations count once per occurrence; the count is accumulated over the DAG, saturating rather than overflowing.
    pub fn resolution_steps(&self) -> u64 {
        let Some(empty) = self.empty_clause() else {
            return 0;
        };

        let mut counts: Vec<Option<u64>> = vec![None; self.clauses.len()];
        let mut stack = vec![empty];

        while let Some(&top) = stack.last() {
            if counts[top].is_some() {
                stack.pop();
                continue;
            }

            match self.antecedents[top] {
                None => {
                    counts[top] = Some(1);
                    stack.pop();
                }

                Some(Resolution { left, right, .. }) => match (counts[left], counts[right]) {
                    (Some(cl), Some(cr)) => {
                        counts[top] = Some(1_u64.saturating_add(cl).saturating_add(cr));
                        stack.pop();
                    }
                    _ => {
                        if counts[left].is_none() {
                            stack.push(left);
                        }
                        if counts[right].is_none() {
                            stack.push(right);
                        }
                    }
                },
            }
        }

        counts[empty].unwrap_or(0)
    }
}
