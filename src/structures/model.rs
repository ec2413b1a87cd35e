/*!
A parsed AIGER circuit.

A [Model] is built once per bound by the [builder](crate::builder), as the label indices it reserves depend on the bound (see below).
Circuit elements are held as literal nodes in the [Formulas](crate::structures::Formulas) arena created alongside the model, each storing the signed variable index of the element at step 0.

# Index layout

For a circuit with maximum variable index `M` checked at bound `k`, step `s` of variable `v` is the signed index `±(v + s·M)`, so steps 0 through `k` occupy indices 1 through `M·(k+1)`.
Above those:
- `false_index = M·(k+1) + 1` and `true_index = M·(k+1) + 2` are the two constant variables.
  These are ordinary variables as far as a SAT solver is concerned; every generated query pins them with the unit clauses `{true_index}` and `{¬false_index}`.
- Tseitin labels are allocated from `label_running_index`, which starts at `true_index` and only ever increases for the lifetime of the model.
*/

use crate::structures::NodeId;

/// A parsed circuit: counts from the header, literal nodes for the body, and the derived index bases.
pub struct Model {
    /// The maximum variable index `M` of the header.
    pub maximum_variable_index: i64,

    /// The number of primary inputs.
    pub input_count: usize,

    /// The number of latches.
    pub latch_count: usize,

    /// The number of outputs.
    pub output_count: usize,

    /// The number of AND gates.
    pub and_gate_count: usize,

    /// The most recently allocated label; fresh labels are allocated by incrementing.
    pub label_running_index: i64,

    /// The variable pinned true in every query.
    pub true_index: i64,

    /// The variable pinned false in every query.
    pub false_index: i64,

    /// One literal node per primary input, declaration order preserved.
    pub inputs: Vec<NodeId>,

    /// Latch (current, next) literal pairs, declaration order preserved.
    ///
    /// Declaration order fixes the layout of the transition formula, though the clause set a formula flattens to is order-insensitive.
    pub latches: Vec<(NodeId, NodeId)>,

    /// One literal node per output; only `outputs[0]` --- the bad-output monitor --- is examined.
    pub outputs: Vec<NodeId>,

    /// AND gate (output, (left input, right input)) literal triples, declaration order preserved.
    ///
    /// Gate outputs are always positive AIG literals; the builder rejects anything else.
    pub and_gates: Vec<(NodeId, (NodeId, NodeId))>,
}

impl Model {
    /// An empty model for a circuit with the given maximum variable index, checked at the given bound.
    pub fn new(maximum_variable_index: i64, bound: u32) -> Self {
        let step_block = maximum_variable_index * (i64::from(bound) + 1);
        let false_index = step_block + 1;
        let true_index = step_block + 2;

        Model {
            maximum_variable_index,
            input_count: 0,
            latch_count: 0,
            output_count: 0,
            and_gate_count: 0,
            label_running_index: true_index,
            true_index,
            false_index,
            inputs: Vec::default(),
            latches: Vec::default(),
            outputs: Vec::default(),
            and_gates: Vec::default(),
        }
    }

    /// A fresh Tseitin label, above every step variable and the two constants.
    pub fn fresh_label(&mut self) -> i64 {
        self.label_running_index += 1;
        self.label_running_index
    }

    /// Whether the signed index is one of the four constant literals.
    ///
    /// The negations count: negated constants arise syntactically during construction.
    pub fn is_constant(&self, label: i64) -> bool {
        label.abs() == self.true_index || label.abs() == self.false_index
    }
}
