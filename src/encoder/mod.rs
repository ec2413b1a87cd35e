/*!
Unrolls a model over a window of steps, and flattens the result to CNF.

# Unrolling

The encoder owns the [Model] and the [Formulas] arena for one bound, and produces the four formulas a check is assembled from.
Each takes a `(start, end)` window of steps, inclusive at both ends and empty when `start > end`:

- [equivalences](Encoder::equivalences) --- the AND gate definitions `out ↔ (left ∧ right)`, conjoined over the gates and over every step of the window.
- [initial](Encoder::initial) --- every latch negated at step 0: the all-zero initial valuation.
- [transition](Encoder::transition) --- for each latch, `current at step i+1 ↔ next at step i`, conjoined over the window.
- [safety](Encoder::safety) --- the bad-output monitor, disjoined over the window: satisfiable exactly when the bad output asserts at some step of the window.

The bounded model checking formula is the conjunction of all four with their full windows.

Stepping a formula is a syntactic [shift](Encoder::shift): step `i` of variable `v` is the index `±(v + i·M)`, so shifting adds `i·M` to the magnitude of every non-constant literal.
Formulas are copied before they are shifted, as shifting mutates literals in place.

# CNF

Flattening is the Tseitin transformation, in [tseitin]: label every connective, then emit the defining clauses of each label.
A formula and its CNF are equisatisfiable, and a satisfying assignment of the CNF restricted to the step variables satisfies the formula.
*/

pub mod tseitin;

use crate::{
    builder,
    structures::{Formulas, Model, NodeId},
    types::err,
};

/// Unrolls one model at one bound; all formulas live in the owned arena.
pub struct Encoder {
    /// The model under check.
    pub model: Model,

    /// The arena holding every formula built for this bound.
    pub formulas: Formulas,

    bound: u32,
}

impl Encoder {
    pub fn new(model: Model, formulas: Formulas, bound: u32) -> Self {
        Encoder {
            model,
            formulas,
            bound,
        }
    }

    /// Parses a circuit and wraps it for encoding at the given bound.
    pub fn from_aiger(aiger: &str, bound: u32) -> Result<Self, err::ErrorKind> {
        let (model, formulas) = builder::parse_aiger(aiger, bound)?;
        Ok(Encoder::new(model, formulas, bound))
    }

    /// The bound the model was parsed for.
    pub fn bound(&self) -> i64 {
        i64::from(self.bound)
    }

    /// A fresh literal node of the constant true.
    pub fn true_node(&mut self) -> NodeId {
        self.formulas.literal(self.model.true_index)
    }

    /// A fresh literal node of the constant false.
    pub fn false_node(&mut self) -> NodeId {
        self.formulas.literal(self.model.false_index)
    }

    /// Whether the formula is the constant true literal.
    pub fn is_true(&self, id: NodeId) -> bool {
        self.formulas.is_literal(id) && self.formulas.label(id) == self.model.true_index
    }

    /// Whether the formula is the constant false literal.
    pub fn is_false(&self, id: NodeId) -> bool {
        self.formulas.is_literal(id) && self.formulas.label(id) == self.model.false_index
    }

    /// Shifts every non-constant literal of a formula by the given number of steps, in place.
    pub fn shift(&mut self, root: NodeId, steps: i64) {
        shift_subtree(&mut self.formulas, &self.model, root, steps);
    }

    /// The gate definitions `out ↔ (left ∧ right)`, conjoined over every gate and every step of the window.
    pub fn equivalences(&mut self, start: i64, end: i64) -> NodeId {
        let gates = self.model.and_gates.clone();

        let mut equivalences = self.true_node();
        for (out, (left, right)) in gates {
            let out = self.formulas.copy(out);
            let left = self.formulas.copy(left);
            let right = self.formulas.copy(right);
            let conjunction = self.formulas.and(left, right);
            let equivalence = self.formulas.equal(out, conjunction);
            equivalences = self.formulas.and(equivalences, equivalence);
        }

        let mut all_steps = self.true_node();
        for step in start..=end {
            let current = self.formulas.copy(equivalences);
            shift_subtree(&mut self.formulas, &self.model, current, step);
            all_steps = self.formulas.and(all_steps, current);
        }
        all_steps
    }

    /// Every latch negated at step 0.
    pub fn initial(&mut self) -> NodeId {
        let latches = self.model.latches.clone();

        let mut formula = self.true_node();
        for (current, _) in latches {
            let negated = self.formulas.negated_literal_copy(current);
            formula = self.formulas.and(formula, negated);
        }
        formula
    }

    /// The latch updates `current at step i+1 ↔ next at step i`, conjoined over every step of the window.
    pub fn transition(&mut self, start: i64, end: i64) -> NodeId {
        let base = self.transition_step();

        let mut formula = self.true_node();
        for step in start..=end {
            let current = self.formulas.copy(base);
            shift_subtree(&mut self.formulas, &self.model, current, step);
            formula = self.formulas.and(formula, current);
        }
        formula
    }

    // The step-0-to-1 transition, shifted to produce the other steps.
    fn transition_step(&mut self) -> NodeId {
        let latches = self.model.latches.clone();

        let mut formula = self.true_node();
        for (current, next) in latches {
            let stepped = self.formulas.copy(current);
            shift_subtree(&mut self.formulas, &self.model, stepped, 1);
            let previous = self.formulas.copy(next);
            let update = self.formulas.equal(stepped, previous);
            formula = self.formulas.and(formula, update);
        }
        formula
    }

    /// The bad-output monitor, disjoined over every step of the window.
    pub fn safety(&mut self, start: i64, end: i64) -> NodeId {
        let monitor = self.model.outputs[0];

        let mut formula = self.false_node();
        for step in start..=end {
            let current = self.formulas.copy(monitor);
            shift_subtree(&mut self.formulas, &self.model, current, step);
            formula = self.formulas.or(formula, current);
        }
        formula
    }

    /// The full bounded model checking formula: equivalences ∧ initial ∧ transition ∧ safety.
    ///
    /// Satisfiable exactly when some trace of at most `bound` steps from the all-zero valuation asserts the bad output.
    pub fn bounded_model_checking_formula(&mut self) -> NodeId {
        let bound = self.bound();
        let equivalences = self.equivalences(0, bound);
        let initial = self.initial();
        let transition = self.transition(0, bound - 1);
        let safety = self.safety(0, bound);
        self.formulas
            .conjoin(&[equivalences, initial, transition, safety])
    }
}

fn shift_subtree(formulas: &mut Formulas, model: &Model, root: NodeId, steps: i64) {
    let offset = model.maximum_variable_index * steps;

    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        match formulas.children(id) {
            Some((left, right)) => {
                stack.push(left);
                stack.push(right);
            }

            None => {
                let label = formulas.label(id);
                if !model.is_constant(label) {
                    match label < 0 {
                        true => formulas.set_label(id, label - offset),
                        false => formulas.set_label(id, label + offset),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATCH_TO_ZERO: &str = "aag 2 1 1 1 0\n2\n4 0\n4\n";

    #[test]
    fn shifting() {
        let mut encoder = Encoder::from_aiger(LATCH_TO_ZERO, 2).expect("Parse failure");

        let positive = encoder.formulas.literal(2);
        let negative = encoder.formulas.literal(-1);
        let constant = encoder.true_node();
        let pair = encoder.formulas.and(positive, negative);
        let formula = encoder.formulas.or(pair, constant);

        encoder.shift(formula, 2);

        assert_eq!(encoder.formulas.label(positive), 6);
        assert_eq!(encoder.formulas.label(negative), -5);
        assert!(encoder.is_true(constant));
    }

    #[test]
    fn initial_negates_latches() {
        let mut encoder = Encoder::from_aiger(LATCH_TO_ZERO, 1).expect("Parse failure");
        let initial = encoder.initial();

        // true ∧ ¬latch, with the latch at step 0
        assert_eq!(
            encoder.formulas.render(initial),
            format!("({}) and (-2)", encoder.model.true_index)
        );
    }

    #[test]
    fn safety_window() {
        let mut encoder = Encoder::from_aiger(LATCH_TO_ZERO, 1).expect("Parse failure");
        let safety = encoder.safety(0, 1);

        // false ∨ monitor@0 ∨ monitor@1
        assert_eq!(
            encoder.formulas.render(safety),
            format!("(({}) or (2)) or (4)", encoder.model.false_index)
        );
    }

    #[test]
    fn transition_relates_steps() {
        let mut encoder = Encoder::from_aiger(LATCH_TO_ZERO, 2).expect("Parse failure");
        let transition = encoder.transition(0, 1);
        let t = encoder.model.true_index;
        let f = encoder.model.false_index;

        // latch@1 ↔ false, then latch@2 ↔ false
        assert_eq!(
            encoder.formulas.render(transition),
            format!("(({t}) and (({t}) and ((4) eq ({f})))) and (({t}) and ((6) eq ({f})))")
        );
    }

    #[test]
    fn empty_windows_are_constant() {
        let mut encoder = Encoder::from_aiger(LATCH_TO_ZERO, 0).expect("Parse failure");
        let transition = encoder.transition(0, -1);
        assert!(encoder.is_true(transition));

        let equivalences = encoder.equivalences(2, 1);
        // the outer fold anchor remains
        assert!(encoder.is_true(equivalences));
    }
}
