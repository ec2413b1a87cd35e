/*!
An arena of expression nodes over which formulas are built.

A formula is a [NodeId] into a [Formulas] arena.
Nodes are one of five kinds: a literal, or one of the binary connectives [And](NodeKind::And), [Or](NodeKind::Or), [Equal](NodeKind::Equal) (xnor), and [NotEqual](NodeKind::NotEqual) (xor).

Every node carries a signed integer *label*:
- A literal node is its label --- the signed variable index it stands for.
- A connective node is created unlabelled (label 0) and receives a label during the [labelling pass](crate::encoder) of the Tseitin transformation.

Once labelling is complete a label uniquely identifies a node, and the label is used wherever node identity matters: the processed set of the clause builder, and the memo tables of the interpolation engine.
Labels are not unique *before* labelling completes, so nothing may rely on them until then.

Construction folds the constants of a [Model](crate::structures::Model): the connective builders do no simplification, which keeps the arena an exact syntax record; short-circuiting on constants happens where it is needed, in the [interpolant](crate::interpolant) combination step.

All traversals use explicit stacks.
Formulas reach depths proportional to the circuit size multiplied by the bound, and the call stack is not a resource to spend on them.
*/

/// An index into a [Formulas] arena.
pub type NodeId = usize;

/// The kind of an expression node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A signed variable, read from the label of the node.
    Literal,

    /// Conjunction.
    And(NodeId, NodeId),

    /// Disjunction.
    Or(NodeId, NodeId),

    /// Logical equivalence (xnor).
    Equal(NodeId, NodeId),

    /// Logical difference (xor).
    NotEqual(NodeId, NodeId),
}

struct Node {
    kind: NodeKind,
    label: i64,
}

/// An arena of expression nodes.
#[derive(Default)]
pub struct Formulas {
    nodes: Vec<Node>,
}

impl Formulas {
    pub fn new() -> Self {
        Formulas::default()
    }

    fn fresh(&mut self, kind: NodeKind, label: i64) -> NodeId {
        self.nodes.push(Node { kind, label });
        self.nodes.len() - 1
    }

    /// A literal node for the given signed variable index.
    pub fn literal(&mut self, label: i64) -> NodeId {
        self.fresh(NodeKind::Literal, label)
    }

    /// An unlabelled conjunction node.
    pub fn and(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.fresh(NodeKind::And(left, right), 0)
    }

    /// An unlabelled disjunction node.
    pub fn or(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.fresh(NodeKind::Or(left, right), 0)
    }

    /// An unlabelled equivalence node.
    pub fn equal(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.fresh(NodeKind::Equal(left, right), 0)
    }

    /// An unlabelled difference node.
    pub fn not_equal(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.fresh(NodeKind::NotEqual(left, right), 0)
    }

    /// The left-fold conjunction of a non-empty sequence of formulas.
    ///
    /// A single formula is returned as-is, without a wrapping node.
    pub fn conjoin(&mut self, formulas: &[NodeId]) -> NodeId {
        let (first, rest) = formulas
            .split_first()
            .unwrap_or_else(|| panic!("! Conjunction of no formulas"));
        rest.iter().fold(*first, |acc, f| self.and(acc, *f))
    }

    /// The left-fold disjunction of a non-empty sequence of formulas.
    ///
    /// A single formula is returned as-is, without a wrapping node.
    pub fn disjoin(&mut self, formulas: &[NodeId]) -> NodeId {
        let (first, rest) = formulas
            .split_first()
            .unwrap_or_else(|| panic!("! Disjunction of no formulas"));
        rest.iter().fold(*first, |acc, f| self.or(acc, *f))
    }

    /// The kind of a node.
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id].kind
    }

    /// The label of a node.
    pub fn label(&self, id: NodeId) -> i64 {
        self.nodes[id].label
    }

    /// Sets the label of a node.
    pub fn set_label(&mut self, id: NodeId, label: i64) {
        self.nodes[id].label = label;
    }

    /// Whether the node is a literal.
    pub fn is_literal(&self, id: NodeId) -> bool {
        matches!(self.nodes[id].kind, NodeKind::Literal)
    }

    /// The children of a connective node, or none for a literal.
    pub fn children(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        match self.nodes[id].kind {
            NodeKind::Literal => None,
            NodeKind::And(l, r)
            | NodeKind::Or(l, r)
            | NodeKind::Equal(l, r)
            | NodeKind::NotEqual(l, r) => Some((l, r)),
        }
    }

    /// A deep structural copy of a formula.
    ///
    /// Connective copies are unlabelled, and literal copies share no storage with the original.
    /// Shared substructure is duplicated per occurrence, so the copy is a tree.
    pub fn copy(&mut self, root: NodeId) -> NodeId {
        enum Task {
            Visit(NodeId),
            Build(NodeId),
        }

        let mut tasks = vec![Task::Visit(root)];
        let mut built: Vec<NodeId> = Vec::default();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(id) => {
                    let kind = self.nodes[id].kind;
                    match kind {
                        NodeKind::Literal => {
                            let label = self.nodes[id].label;
                            let copy = self.literal(label);
                            built.push(copy);
                        }
                        NodeKind::And(l, r)
                        | NodeKind::Or(l, r)
                        | NodeKind::Equal(l, r)
                        | NodeKind::NotEqual(l, r) => {
                            tasks.push(Task::Build(id));
                            tasks.push(Task::Visit(r));
                            tasks.push(Task::Visit(l));
                        }
                    }
                }

                Task::Build(id) => {
                    let right = built.pop().unwrap_or_else(|| panic!("! Copy underflow"));
                    let left = built.pop().unwrap_or_else(|| panic!("! Copy underflow"));
                    let kind = self.nodes[id].kind;
                    let copy = match kind {
                        NodeKind::Literal => panic!("! Literal queued for connective rebuild"),
                        NodeKind::And(_, _) => self.and(left, right),
                        NodeKind::Or(_, _) => self.or(left, right),
                        NodeKind::Equal(_, _) => self.equal(left, right),
                        NodeKind::NotEqual(_, _) => self.not_equal(left, right),
                    };
                    built.push(copy);
                }
            }
        }

        match built.pop() {
            Some(copy) => copy,
            None => panic!("! Copy produced no formula"),
        }
    }

    /// A copy of a literal node with the opposite polarity.
    ///
    /// Defined only on literals.
    pub fn negated_literal_copy(&mut self, id: NodeId) -> NodeId {
        match self.nodes[id].kind {
            NodeKind::Literal => {
                let label = self.nodes[id].label;
                self.literal(-label)
            }
            _ => panic!("! Negated copy of a connective"),
        }
    }

    /// The structural size of a formula: the node count of its syntax tree.
    ///
    /// Shared substructure counts once per occurrence.
    /// The count is accumulated over the DAG, so sharing cannot blow up the traversal.
    pub fn count_nodes(&self, root: NodeId) -> u64 {
        self.fold_counts(root, |_| 1)
    }

    /// The number of nodes in the syntax tree of a formula carrying the given label.
    pub fn count_label(&self, root: NodeId, label: i64) -> u64 {
        self.fold_counts(root, |node| u64::from(node == label))
    }

    fn fold_counts(&self, root: NodeId, weight: impl Fn(i64) -> u64) -> u64 {
        let mut counts: Vec<Option<u64>> = vec![None; self.nodes.len()];
        let mut stack = vec![root];

        while let Some(&top) = stack.last() {
            if counts[top].is_some() {
                stack.pop();
                continue;
            }

            let own = weight(self.nodes[top].label);

            match self.children(top) {
                None => {
                    counts[top] = Some(own);
                    stack.pop();
                }
                Some((l, r)) => match (counts[l], counts[r]) {
                    (Some(cl), Some(cr)) => {
                        counts[top] = Some(own.saturating_add(cl).saturating_add(cr));
                        stack.pop();
                    }
                    _ => {
                        if counts[l].is_none() {
                            stack.push(l);
                        }
                        if counts[r].is_none() {
                            stack.push(r);
                        }
                    }
                },
            }
        }

        counts[root].unwrap_or_else(|| panic!("! Count missing for root"))
    }

    /// A parenthesised infix rendering of a formula, for logs and tests.
    pub fn render(&self, root: NodeId) -> String {
        enum Piece<'a> {
            Node(NodeId),
            Text(&'a str),
        }

        let mut the_string = String::new();
        let mut pieces = vec![Piece::Node(root)];

        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => the_string.push_str(text),

                Piece::Node(id) => match self.nodes[id].kind {
                    NodeKind::Literal => the_string.push_str(&self.nodes[id].label.to_string()),
                    NodeKind::And(l, r) => render_connective(&mut pieces, "and", l, r),
                    NodeKind::Or(l, r) => render_connective(&mut pieces, "or", l, r),
                    NodeKind::Equal(l, r) => render_connective(&mut pieces, "eq", l, r),
                    NodeKind::NotEqual(l, r) => render_connective(&mut pieces, "neq", l, r),
                },
            }
        }

        fn render_connective<'a>(
            pieces: &mut Vec<Piece<'a>>,
            op: &'a str,
            left: NodeId,
            right: NodeId,
        ) {
            pieces.push(Piece::Text(")"));
            pieces.push(Piece::Node(right));
            pieces.push(Piece::Text(" ("));
            pieces.push(Piece::Text(op));
            pieces.push(Piece::Text(") "));
            pieces.push(Piece::Node(left));
            pieces.push(Piece::Text("("));
        }

        the_string
    }
}
