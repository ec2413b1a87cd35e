/*!
The abstract elements of a check, and their representation.

- A [Clause] is a sorted, duplicate-free collection of non-zero signed integers, interpreted as a disjunction.
- [Formulas] is an arena of expression nodes; a formula is a [NodeId] into the arena.
- A [Model] is a parsed circuit, holding literal nodes for its inputs, latches, outputs, and gates.
*/

mod clause;
pub use clause::{variables, Clause, ClauseSet};

mod formula;
pub use formula::{Formulas, NodeId, NodeKind};

mod model;
pub use model::Model;
