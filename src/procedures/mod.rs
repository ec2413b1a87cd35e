/*!
The two top-level checking procedures.

- [bmc] decides whether a counterexample of at most `bound` steps exists, by one SAT query over the unrolled transition relation.
- [interpolation] decides safety at every depth, by iterating bounded checks with interpolant-driven over-approximation of the reachable states.

Both consume the circuit text rather than a parsed model: a model is parsed per bound, as its index layout depends on the bound.
*/

pub mod bmc;
pub mod interpolation;
