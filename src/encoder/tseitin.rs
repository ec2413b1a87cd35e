/*!
The Tseitin transformation: formulas to equisatisfiable clause sets.

Two passes over the formula DAG, each by explicit stack:

1. [add_labels](Encoder::add_labels) assigns a fresh label to every *unlabelled* connective.
   Labels already assigned --- by an earlier pass over shared substructure, such as an interpolant folded into a later query --- are kept, so a node means the same variable in every query it reaches.
2. Clause emission walks the DAG once (processed set keyed by label) and adds the defining clauses of each connective.

The clause set always contains the unit clause of the root label, together with the units pinning the two constant variables.
*/

use std::collections::HashSet;

use crate::{
    encoder::Encoder,
    misc::log::targets,
    structures::{Clause, ClauseSet, NodeId, NodeKind},
};

impl Encoder {
    /// The Tseitin clause set of a formula.
    ///
    /// The set is freshly built on each call: definitions of shared labelled substructure are re-emitted, so every query carrying the formula is self-contained.
    pub fn generate_clauses(&mut self, root: NodeId) -> ClauseSet {
        self.add_labels(root);

        let mut clauses = ClauseSet::default();
        clauses.insert(Clause::unit(self.formulas.label(root)));
        clauses.insert(Clause::unit(self.model.true_index));
        clauses.insert(Clause::unit(-self.model.false_index));

        self.add_definitional_clauses(root, &mut clauses);

        log::trace!(target: targets::ENCODER,
            "Generated {} clauses over {} variables",
            clauses.len(),
            self.model.label_running_index
        );

        clauses
    }

    /// Assigns a fresh label to every unlabelled connective of the formula.
    ///
    /// A labelled connective was reached by an earlier pass, along with everything below it, and is skipped whole.
    pub fn add_labels(&mut self, root: NodeId) {
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if let Some((left, right)) = self.formulas.children(id) {
                if self.formulas.label(id) != 0 {
                    continue;
                }
                let label = self.model.fresh_label();
                self.formulas.set_label(id, label);
                stack.push(left);
                stack.push(right);
            }
        }
    }

    fn add_definitional_clauses(&self, root: NodeId, clauses: &mut ClauseSet) {
        let mut processed: HashSet<i64> = HashSet::default();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            let Some((left, right)) = self.formulas.children(id) else {
                continue;
            };

            let label = self.formulas.label(id);
            if !processed.insert(label) {
                continue;
            }

            let l = self.formulas.label(left);
            let r = self.formulas.label(right);

            match self.formulas.kind(id) {
                NodeKind::Literal => {}

                NodeKind::And(_, _) => {
                    clauses.insert(Clause::from_literals([label, -l, -r]));
                    clauses.insert(Clause::from_literals([-label, l]));
                    clauses.insert(Clause::from_literals([-label, r]));
                }

                NodeKind::Or(_, _) => {
                    clauses.insert(Clause::from_literals([-label, l, r]));
                    clauses.insert(Clause::from_literals([label, -l]));
                    clauses.insert(Clause::from_literals([label, -r]));
                }

                NodeKind::Equal(_, _) => {
                    clauses.insert(Clause::from_literals([label, l, r]));
                    clauses.insert(Clause::from_literals([-label, -l, r]));
                    clauses.insert(Clause::from_literals([-label, l, -r]));
                    clauses.insert(Clause::from_literals([label, -l, -r]));
                }

                NodeKind::NotEqual(_, _) => {
                    clauses.insert(Clause::from_literals([-label, -l, -r]));
                    clauses.insert(Clause::from_literals([label, l, -r]));
                    clauses.insert(Clause::from_literals([label, -l, r]));
                    clauses.insert(Clause::from_literals([-label, l, r]));
                }
            }

            stack.push(left);
            stack.push(right);
        }
    }

    /// Writes the clause set in DIMACS form.
    ///
    /// The declared variable count is the running label index, covering every step variable, the two constants, and every label allocated so far.
    pub fn write_dimacs(
        &self,
        clauses: &ClauseSet,
        writer: &mut impl std::io::Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "p cnf {} {}",
            self.model.label_running_index,
            clauses.len()
        )?;
        for clause in clauses {
            writeln!(writer, "{}", clause.as_dimacs(true))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATCH_TO_ZERO: &str = "aag 2 1 1 1 0\n2\n4 0\n4\n";

    fn encoder() -> Encoder {
        Encoder::from_aiger(LATCH_TO_ZERO, 1).expect("Parse failure")
    }

    #[test]
    fn units_and_root() {
        let mut encoder = encoder();
        let a = encoder.formulas.literal(1);
        let b = encoder.formulas.literal(2);
        let conjunction = encoder.formulas.and(a, b);

        let clauses = encoder.generate_clauses(conjunction);
        let root = encoder.formulas.label(conjunction);

        assert!(clauses.contains(&Clause::unit(root)));
        assert!(clauses.contains(&Clause::unit(encoder.model.true_index)));
        assert!(clauses.contains(&Clause::unit(-encoder.model.false_index)));
    }

    #[test]
    fn conjunction_definition() {
        let mut encoder = encoder();
        let a = encoder.formulas.literal(1);
        let b = encoder.formulas.literal(-2);
        let conjunction = encoder.formulas.and(a, b);

        let clauses = encoder.generate_clauses(conjunction);
        let label = encoder.formulas.label(conjunction);

        assert!(clauses.contains(&Clause::from_literals([label, -1, 2])));
        assert!(clauses.contains(&Clause::from_literals([-label, 1])));
        assert!(clauses.contains(&Clause::from_literals([-label, -2])));
        // root unit, two constant units, three definitional clauses
        assert_eq!(clauses.len(), 6);
    }

    #[test]
    fn difference_definition() {
        let mut encoder = encoder();
        let a = encoder.formulas.literal(1);
        let b = encoder.formulas.literal(2);
        let difference = encoder.formulas.not_equal(a, b);

        let clauses = encoder.generate_clauses(difference);
        let label = encoder.formulas.label(difference);

        assert!(clauses.contains(&Clause::from_literals([-label, -1, -2])));
        assert!(clauses.contains(&Clause::from_literals([label, 1, -2])));
        assert!(clauses.contains(&Clause::from_literals([label, -1, 2])));
        assert!(clauses.contains(&Clause::from_literals([-label, 1, 2])));
    }

    #[test]
    fn labels_are_fresh_and_stable() {
        let mut encoder = encoder();
        let a = encoder.formulas.literal(1);
        let b = encoder.formulas.literal(2);
        let disjunction = encoder.formulas.or(a, b);

        let first = encoder.generate_clauses(disjunction);
        let label = encoder.formulas.label(disjunction);
        assert!(label > encoder.model.true_index);

        // A later query over the same formula keeps the label and re-emits its definition.
        let c = encoder.formulas.literal(-1);
        let wrapped = encoder.formulas.and(disjunction, c);
        let second = encoder.generate_clauses(wrapped);

        assert_eq!(encoder.formulas.label(disjunction), label);
        assert!(second.contains(&Clause::from_literals([-label, 1, 2])));
        assert!(first.contains(&Clause::from_literals([-label, 1, 2])));
    }

    #[test]
    fn shared_substructure_once() {
        let mut encoder = encoder();
        let a = encoder.formulas.literal(1);
        let b = encoder.formulas.literal(2);
        let shared = encoder.formulas.and(a, b);
        let both = encoder.formulas.or(shared, shared);

        let clauses = encoder.generate_clauses(both);
        let label = encoder.formulas.label(both);
        let inner = encoder.formulas.label(shared);

        // or definition collapses to two distinct clauses on identical children
        assert!(clauses.contains(&Clause::from_literals([-label, inner])));
        assert!(clauses.contains(&Clause::from_literals([label, -inner])));
        // 3 units + 2 or + 3 and
        assert_eq!(clauses.len(), 8);
    }

    #[test]
    fn dimacs_header() {
        let mut encoder = encoder();
        let a = encoder.formulas.literal(1);
        let b = encoder.formulas.literal(2);
        let conjunction = encoder.formulas.and(a, b);
        let clauses = encoder.generate_clauses(conjunction);

        let mut out = Vec::new();
        encoder
            .write_dimacs(&clauses, &mut out)
            .expect("Write failure");
        let out = String::from_utf8(out).expect("Encoding failure");

        let header = out.lines().next().expect("Empty DIMACS");
        assert_eq!(
            header,
            format!("p cnf {} {}", encoder.model.label_running_index, clauses.len())
        );
        assert_eq!(out.lines().count(), 1 + clauses.len());
    }
}
